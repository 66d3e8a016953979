use crate::core::{CallToAction, Channel};
use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Solid green, used by the highlighted plan
    Primary,
    /// Solid slate
    Secondary,
    /// Slate border on white
    Outline,
    /// Telegram blue hero button
    Telegram,
    /// WhatsApp green hero button
    WhatsApp,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-green-600 text-white hover:bg-green-700 shadow-lg shadow-green-200"
            }
            ButtonVariant::Secondary => "bg-slate-900 text-white hover:bg-slate-800",
            ButtonVariant::Outline => "border border-slate-900 text-slate-900 hover:bg-slate-50",
            ButtonVariant::Telegram => {
                "bg-blue-500 hover:bg-blue-600 text-white shadow-lg shadow-blue-200"
            }
            ButtonVariant::WhatsApp => {
                "bg-green-500 hover:bg-green-600 text-white shadow-lg shadow-green-200"
            }
        }
    }
}

impl From<Channel> for ButtonVariant {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Telegram => ButtonVariant::Telegram,
            Channel::WhatsApp => ButtonVariant::WhatsApp,
        }
    }
}

const CTA_BASE: &str = "flex-1 flex items-center justify-center gap-2 py-3 px-6 rounded-xl font-bold transition-all";

/// Hero call-to-action.
///
/// Renders a link opening in a new tab when the action has a destination,
/// otherwise an inert button.
#[component]
pub fn CtaButton(action: CallToAction) -> impl IntoView {
    let class = format!("{} {}", CTA_BASE, ButtonVariant::from(action.channel).class());
    let content = move || {
        view! {
            <Icon name=action.channel.icon() class="w-5 h-5" />
            {action.label}
        }
    };

    match action.href {
        Some(href) => view! {
            <a
                class=class
                href=href
                target="_blank"
                rel="noopener noreferrer"
                data-cta=action.channel.slug()
            >
                {content()}
            </a>
        }
        .into_any(),
        None => view! {
            <button type="button" class=class data-cta=action.channel.slug()>
                {content()}
            </button>
        }
        .into_any(),
    }
}

/// Full-width pricing button with no attached action
#[component]
pub fn PlanButton(
    variant: ButtonVariant,
    children: Children,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = format!(
        "w-full py-3 px-6 rounded-xl font-bold transition-colors {}",
        variant.class()
    );
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button type="button" class=full_classes>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_maps_to_variant() {
        assert_eq!(ButtonVariant::from(Channel::Telegram), ButtonVariant::Telegram);
        assert_eq!(ButtonVariant::from(Channel::WhatsApp), ButtonVariant::WhatsApp);
    }

    #[test]
    fn test_variant_classes_are_distinct() {
        let variants = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline,
            ButtonVariant::Telegram,
            ButtonVariant::WhatsApp,
        ];
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(a.class(), b.class(), "{:?} and {:?} share classes", a, b);
            }
        }
    }
}
