use leptos::prelude::*;

/// Path of the SVG sprite served from `public/`
pub const SPRITE: &str = "/icons/sprite.svg";

/// Stroke icon from the sprite. Inherits `currentColor`, so text colour
/// classes tint it.
#[component]
pub fn Icon(
    /// Symbol id inside the sprite
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(into, default = "w-5 h-5".to_string())]
    class: String,
) -> impl IntoView {
    let symbol = format!(r#"<use href="{}#{}"></use>"#, SPRITE, name);

    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            viewBox="0 0 24 24"
            data-icon=name
            inner_html=symbol
        ></svg>
    }
}

/// Icon names available in the sprite
pub mod icons {
    pub const SEND: &str = "send";
    pub const MESSAGE_CIRCLE: &str = "message-circle";
    pub const CHECK: &str = "check";
    pub const ZAP: &str = "zap";
    pub const SMARTPHONE: &str = "smartphone";
    pub const HOME: &str = "home";

    /// Every symbol the sprite must define
    pub const ALL: [&str; 6] = [SEND, MESSAGE_CIRCLE, CHECK, ZAP, SMARTPHONE, HOME];
}
