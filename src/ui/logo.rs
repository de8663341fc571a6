//! Brand logo mark

use dioxus::prelude::*;

/// Fixed SplitPay mark shown opposite the snippet text
#[component]
pub fn Logo() -> Element {
    rsx! {
        div {
            class: "shrink-0 w-12 h-8 rounded-md bg-[var(--brand)] flex items-center justify-center",
            svg {
                width: "28",
                height: "16",
                view_box: "0 0 28 16",
                fill: "none",
                rect { x: "1", y: "3", width: "6", height: "10", rx: "2", fill: "white" },
                rect { x: "8.5", y: "3", width: "6", height: "10", rx: "2", fill: "white", opacity: "0.75" },
                rect { x: "16", y: "3", width: "6", height: "10", rx: "2", fill: "white", opacity: "0.5" },
                rect { x: "23.5", y: "3", width: "3.5", height: "10", rx: "1.75", fill: "white", opacity: "0.25" },
            }
        }
    }
}
