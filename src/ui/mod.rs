//! UI components
//!
//! Dioxus components for the snippet card and its learn-more modal.

pub mod logo;
pub mod modal;
pub mod rich_text;
pub mod snippet_card;

pub use snippet_card::SnippetCard;
