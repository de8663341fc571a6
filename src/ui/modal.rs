//! Learn-more modal
//!
//! Backdrop plus a dialog hosting the embedded learn-more page. The host
//! decides what dismissal means; this component only reports it.

use crate::types::Lang;
use dioxus::prelude::*;

/// Modal web view for the learn-more page
///
/// `on_appear` fires once when the embedded page becomes visible;
/// `on_dismiss` fires for every way out (backdrop click or close button).
#[component]
pub fn LearnMoreModal(
    url: String,
    lang: Lang,
    on_appear: EventHandler<()>,
    on_dismiss: EventHandler<()>,
) -> Element {
    // Reads no reactive state, so this runs once per mount
    use_effect(move || {
        on_appear.call(());
    });

    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-50 flex items-center justify-center p-4",
            onclick: move |_| on_dismiss.call(()),

            // Dialog
            div {
                class: "w-full max-w-lg h-[80vh] bg-white rounded-2xl shadow-2xl overflow-hidden flex flex-col",
                lang: "{lang.code()}",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    class: "flex items-center justify-end p-2 border-b border-[var(--border-subtle)]",
                    button {
                        class: "w-8 h-8 rounded-full flex items-center justify-center text-[var(--text-secondary)] hover:bg-[var(--bg-hover)] transition-colors",
                        onclick: move |_| on_dismiss.call(()),
                        "✕"
                    }
                }

                iframe {
                    class: "flex-1 w-full border-0",
                    src: "{url}",
                }
            }
        }
    }
}
