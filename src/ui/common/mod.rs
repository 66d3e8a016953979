//! Common reusable UI components
//!
//! Buttons and badges shared by the hero and pricing sections.

pub mod badge;
pub mod button;

pub use badge::{Badge, BadgeVariant, LiveDot};
pub use button::{ButtonVariant, CtaButton, PlanButton};
