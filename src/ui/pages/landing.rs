//! Landing page component
//!
//! The whole marketing site on one page:
//! - SEO meta tags for search engine optimization
//! - Navigation bar with brand and app buttons
//! - Hero section with the messaging bot call-to-actions
//! - Pricing section with the primary plans and group summaries
//! - Footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{BRAND, COPYRIGHT_YEAR};
use crate::ui::hero::HeroSection;
use crate::ui::pricing::PricingSection;

const DESCRIPTION: &str = "Smart Saver AI compares real-time prices across Blinkit, Zepto and Swiggy Instamart so you always pay the lowest price.";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <main class="min-h-screen bg-white">
            <NavBar />
            <HeroSection />
            <PricingSection />
            <Footer />
        </main>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} - Stop Overpaying on Quick Commerce", BRAND);

    view! {
        <Title text=title.clone() />

        <Meta name="description" content=DESCRIPTION />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=DESCRIPTION />
    }
}

/// Sticky navigation bar
#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="flex items-center justify-between px-6 py-4 bg-white/80 backdrop-blur-md sticky top-0 z-50 border-b border-slate-100">
            <div class="text-2xl font-bold text-green-600 tracking-tighter">{BRAND}</div>
            <div class="flex gap-4">
                <button type="button" class="text-sm font-medium text-slate-600 hover:text-green-600">
                    "Login"
                </button>
                <button
                    type="button"
                    class="text-sm font-bold bg-slate-900 text-white px-4 py-2 rounded-lg hover:bg-slate-800"
                >
                    "Get App"
                </button>
            </div>
        </nav>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-50 py-12 text-center text-slate-500 text-sm">
            <p>{format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, BRAND)}</p>
            <p class="mt-2">"Made with ❤️ in Bengaluru."</p>
        </footer>
    }
}
