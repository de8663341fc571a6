//! Promotional snippet card
//!
//! The inline pay-in-4 card shown on a product page. Tapping anywhere on the
//! card opens the learn-more modal. All state and analytics transitions live
//! in [`SnippetController`]; this component forwards UI events into it.

use crate::analytics::AnalyticsHandle;
use crate::snippet::{SnippetController, SnippetOffer};
use crate::types::{Currency, LayoutDirection};
use crate::ui::logo::Logo;
use crate::ui::modal::LearnMoreModal;
use crate::ui::rich_text::RichText;
use dioxus::prelude::*;

#[component]
pub fn SnippetCard(
    amount: f64,
    currency: Currency,
    direction: LayoutDirection,
    #[props(default = false)] is_privacy_enabled: bool,
    #[props(default = false)] prefer_currency_in_arabic: bool,
) -> Element {
    let analytics = use_context::<AnalyticsHandle>();
    let mut controller = use_signal(|| {
        let offer = SnippetOffer {
            amount,
            currency,
            is_privacy_enabled,
            prefer_currency_in_arabic,
        };
        SnippetController::new(offer, analytics)
    });

    // Runs once after the first render
    use_effect(move || {
        controller.write().mounted();
    });

    let offer = controller.read().offer().clone();
    let is_open = controller.read().is_modal_open();
    let runs = offer.text_runs(direction);

    rsx! {
        div {
            dir: "{direction.dir_attr()}",
            class: "bg-white rounded-lg border border-[var(--border-subtle)] px-4 py-4 cursor-pointer select-none",
            onclick: move |_| controller.write().tap(),

            div {
                class: "flex items-start gap-3",

                div {
                    class: "flex-1 min-w-0 text-start",
                    RichText { runs }
                }

                Logo {}
            }
        }

        if is_open {
            LearnMoreModal {
                url: offer.page_url(direction),
                lang: offer.page_lang(direction),
                on_appear: move |_| controller.write().modal_appeared(),
                on_dismiss: move |_| controller.write().modal_dismissed(),
            }
        }
    }
}
