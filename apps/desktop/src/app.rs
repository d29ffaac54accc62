//! Root application component — titlebar, search panel, results, status bar.

use dioxus::prelude::*;

use crate::results::ResultsView;
use crate::search::SearchPanel;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Move the pre-runtime core into the signal on first render
    use_hook(|| {
        if let Some(core) = crate::INITIAL_CORE.lock().unwrap().take() {
            *CORE.write() = Some(core);
        }
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Titlebar (drag region)
            div {
                class: "titlebar",
                span { class: "titlebar-title", "ResearchScope" }
            }

            // Main content area
            div {
                class: "content-area",

                SearchPanel {}
                ResultsView {}
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let core = CORE.read();
    let search = SEARCH.read();

    let endpoint = core
        .as_ref()
        .map(|c| c.client.base_url().to_string())
        .unwrap_or_else(|| "not configured".to_string());

    let status = match &*search {
        SearchState::Idle => "idle".to_string(),
        SearchState::Loading => "searching...".to_string(),
        SearchState::Failed(_) => "error".to_string(),
        SearchState::Success(data) => format!(
            "{} papers | {} news | {} blogs",
            data.arxiv.len(),
            data.news.len(),
            data.blogs.len()
        ),
    };

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-endpoint", "{endpoint}" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-status", "{status}" }
        }
    }
}
