//! Page content and server plumbing for the Smart Saver AI site

mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(test)]
mod tests;

pub use catalog::*;
