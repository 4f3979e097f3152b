//! Composable card surfaces for Dioxus applications.
//!
//! [`components::Card`] combines theme, elevation, border, rounding, density
//! and variant styling with slot-based content, link navigation and a
//! loading indicator. The option groups in [`styles`] are reusable by other
//! surfaces that follow the same class conventions.

pub mod components;
pub mod error;
pub mod link;
pub mod styles;
pub mod theme;

pub use error::StyleError;
