//! Root Dioxus application component
//!
//! Demo shell for the snippet: wires the analytics sink from config and
//! shows the card variants a merchant integration would produce.

use crate::analytics::{AnalyticsHandle, HttpSink, LogSink};
use crate::config::{load_config, SdkConfig};
use crate::types::{Currency, LayoutDirection};
use crate::ui::SnippetCard;
use dioxus::prelude::*;

const THEME_CSS: &str = r#"
:root {
    --brand: #00c48c;
    --bg-main: #f6f7f9;
    --bg-hover: #eef0f3;
    --text-primary: #14171f;
    --text-secondary: #6b7280;
    --border-subtle: #e3e6ea;
}
"#;

/// Pick the analytics sink for this run
///
/// Events go to the collector endpoint when one is configured, otherwise to
/// the structured log.
pub fn build_analytics(config: &SdkConfig) -> AnalyticsHandle {
    match &config.analytics_endpoint {
        Some(endpoint) => {
            tracing::info!("Sending analytics to {}", endpoint);
            AnalyticsHandle::new(HttpSink::new(endpoint.clone()))
        }
        None => AnalyticsHandle::new(LogSink),
    }
}

#[component]
pub fn App() -> Element {
    let config = load_config();
    use_context_provider(|| build_analytics(&config));

    rsx! {
        style { "{THEME_CSS}" }

        div {
            class: "min-h-screen w-screen bg-[var(--bg-main)] font-sans",
            "data-theme": "{config.theme}",

            div {
                class: "max-w-xl mx-auto flex flex-col gap-4 p-6",

                h1 {
                    class: "text-lg font-semibold text-[var(--text-primary)]",
                    "SplitPay snippet"
                }

                SnippetCard {
                    amount: 1990.0,
                    currency: Currency::QAR,
                    direction: LayoutDirection::Ltr,
                }

                SnippetCard {
                    amount: 1990.0,
                    currency: Currency::AED,
                    direction: LayoutDirection::Ltr,
                    is_privacy_enabled: true,
                }

                SnippetCard {
                    amount: 1990.0,
                    currency: Currency::QAR,
                    direction: LayoutDirection::Rtl,
                }

                SnippetCard {
                    amount: 1990.0,
                    currency: Currency::SAR,
                    direction: LayoutDirection::Rtl,
                    is_privacy_enabled: true,
                    prefer_currency_in_arabic: true,
                }
            }
        }
    }
}
