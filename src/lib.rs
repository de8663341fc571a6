//! SplitPay Snippet Library
//!
//! Promotional pay-in-4 snippet card for the SplitPay checkout SDK: the
//! card component, its learn-more modal, and the analytics it reports.

pub mod analytics;
pub mod app;
pub mod config;
pub mod i18n;
pub mod snippet;
pub mod types;
pub mod ui;
