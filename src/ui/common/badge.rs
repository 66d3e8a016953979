use leptos::prelude::*;

/// Badge variant types for different use cases
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeVariant {
    /// Release pill above the hero headline
    Release,
    /// Ribbon pinned to the top edge of the highlighted plan
    Ribbon,
    /// Small tag next to a discounted price
    Exclusive,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Release => {
                "bg-green-100 text-green-800 text-xs font-bold px-3 py-1 rounded-full uppercase tracking-wide"
            }
            BadgeVariant::Ribbon => {
                "absolute top-0 left-1/2 -translate-x-1/2 -translate-y-1/2 bg-green-600 text-white px-4 py-1 rounded-full text-xs font-bold tracking-wider shadow-sm"
            }
            BadgeVariant::Exclusive => {
                "bg-green-100 text-green-700 text-xs font-bold px-2 py-0.5 rounded"
            }
        }
    }
}

/// Badge component for short labels
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Visual variant
    variant: BadgeVariant,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), class)
    };

    view! {
        <div class=full_classes>
            {children()}
        </div>
    }
}

/// Pulsing green dot used as a "live" indicator
#[component]
pub fn LiveDot() -> impl IntoView {
    view! {
        <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse" aria-hidden="true"></span>
    }
}
