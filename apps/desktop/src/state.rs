//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use researchscope_core::{ClientConfig, ResearchResponse, SearchClient};

/// Search lifecycle as a tagged union — `Loading` and a settled payload
/// cannot coexist by construction.
#[derive(Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(ResearchResponse),
    Failed(String),
}

/// Client and settings — created once at startup from config.
pub struct AppCore {
    pub client: SearchClient,
    pub max_results: usize,
}

impl AppCore {
    /// Build from `.researchscope.toml` / environment, defaults otherwise.
    pub fn from_config() -> Self {
        let cfg = ClientConfig::load();
        AppCore {
            client: SearchClient::new(&cfg),
            max_results: cfg.max_results,
        }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Client + settings — set once on first render
pub static CORE: GlobalSignal<Option<AppCore>> = Signal::global(|| None);

/// Current query text
pub static QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Search lifecycle state
pub static SEARCH: GlobalSignal<SearchState> = Signal::global(SearchState::default);
