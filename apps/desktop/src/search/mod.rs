//! Search panel — query input plus submit/clear controls.

mod search_input;

use dioxus::prelude::*;
use search_input::SearchInput;

/// Search panel spanning the full width of the content area.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchInput {}
        }
    }
}
