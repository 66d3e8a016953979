//! Hero section: headline, pitch, messaging call-to-actions and the live
//! user indicator.

use leptos::prelude::*;

use crate::core::{HERO_ACTIONS, LIVE_USERS, format_count};
use crate::ui::common::{Badge, BadgeVariant, CtaButton, LiveDot};

#[component]
pub fn HeroSection() -> impl IntoView {
    let live_users = format!("{} users saving money right now", format_count(LIVE_USERS));

    view! {
        <section
            id="hero"
            class="flex flex-col items-center justify-center py-20 px-4 bg-gradient-to-br from-green-50 to-blue-50"
        >
            <Badge variant=BadgeVariant::Release class="mb-6">
                "v1.0 Live for Blinkit & Zepto"
            </Badge>

            <h1 class="text-4xl md:text-6xl font-extrabold text-center text-slate-900 mb-6 leading-tight">
                "Stop Overpaying on "
                <br />
                <span class="text-green-600">"Quick Commerce"</span>
            </h1>

            <p class="text-lg text-slate-600 mb-8 text-center max-w-2xl">
                "Our AI scrapes real-time prices across Blinkit, Zepto, and Swiggy Instamart to find you the absolute lowest price instantly."
            </p>

            <div class="flex flex-col sm:flex-row gap-4 w-full max-w-md">
                {HERO_ACTIONS
                    .iter()
                    .map(|action| view! { <CtaButton action=*action /> })
                    .collect_view()}
            </div>

            <div class="mt-8 flex items-center gap-2 text-sm text-slate-500">
                <LiveDot />
                {live_users}
            </div>
        </section>
    }
}
