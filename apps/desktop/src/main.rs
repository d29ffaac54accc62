//! ResearchScope Desktop — Dioxus-powered multi-source research search UI.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod results;
mod search;
mod state;

use app::App;
use state::AppCore;

/// Pre-runtime storage — built before Dioxus launches, consumed on first render.
pub static INITIAL_CORE: Mutex<Option<AppCore>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("researchscope=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load config before launch — store in Mutex, NOT in the signal
    let core = AppCore::from_config();
    tracing::info!("search service endpoint: {}", core.client.base_url());
    *INITIAL_CORE.lock().unwrap() = Some(core);

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((10, 10, 10, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("ResearchScope")
                            .with_inner_size(LogicalSize::new(1100.0, 800.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
