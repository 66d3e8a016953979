pub mod common;
pub mod hero;
pub mod icon;
pub mod pages;
pub mod pricing;

pub use hero::HeroSection;
pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
pub use pricing::PricingSection;
