//! Core value types
//!
//! Closed enums shared across the snippet, analytics, and UI layers.

pub mod currency;
pub mod locale;

pub use currency::{format_amount, Currency};
pub use locale::{Lang, LayoutDirection};
