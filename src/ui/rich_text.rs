//! Generic rich-text renderer
//!
//! Renders a list of styled text runs as inline spans.

use crate::snippet::{RunStyle, TextRun};
use dioxus::prelude::*;

fn run_class(style: RunStyle) -> &'static str {
    match style {
        RunStyle::Body => "font-normal",
        RunStyle::BodyBold => "font-semibold",
        RunStyle::BodyUnderline => "font-normal underline underline-offset-2",
    }
}

#[component]
pub fn RichText(runs: Vec<TextRun>) -> Element {
    rsx! {
        p {
            class: "text-sm leading-relaxed text-[var(--text-primary)]",
            for run in runs {
                span { class: run_class(run.style), "{run.text}" }
            }
        }
    }
}
