//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::{BRAND, COPYRIGHT_YEAR};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text=format!("Page Not Found - {}", BRAND) />

        <div class="min-h-screen bg-white flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-slate-900 mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-slate-900 mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-slate-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 px-6 py-3 bg-green-600 hover:bg-green-700 text-white font-bold rounded-xl transition-colors"
                >
                    <Icon name=icons::HOME class="w-5 h-5" />
                    "Go Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-400">
                    {format!("© {} {}", COPYRIGHT_YEAR, BRAND)}
                </p>
            </div>
        </div>
    }
}
