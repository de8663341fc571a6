//! SplitPay Snippet - demo application
//!
//! Desktop shell showing the pay-in-4 promotional card in its supported
//! locale and privacy variants.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use splitpay_snippet::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("splitpay_snippet=info".parse().unwrap()),
        )
        .init();

    info!("Starting SplitPay snippet demo v{}", env!("CARGO_PKG_VERSION"));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("SplitPay Snippet")
                    .with_inner_size(LogicalSize::new(520.0, 720.0)),
            ),
        )
        .launch(App);
}
