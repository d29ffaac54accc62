//! Hero search input — Enter and the Search button share one submission path.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    // Request generation — completions only apply if they are still the latest
    let request_gen = use_signal(|| 0u64);
    let query = QUERY.read();
    let has_query = !query.trim().is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            span { class: "search-label", "RESEARCH" }

            div {
                class: "search-input-row",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search papers, news, blogs...",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        *QUERY.write() = e.value();
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            run_search(request_gen);
                        }
                    },
                }

                button {
                    class: "search-submit",
                    onclick: move |_| run_search(request_gen),
                    "Search"
                }

                // Clear button
                if has_query {
                    button {
                        class: "search-clear",
                        onclick: move |_| {
                            *QUERY.write() = String::new();
                            *SEARCH.write() = SearchState::Idle;
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

/// Submit the current query. Whitespace-only input is a no-op.
fn run_search(mut request_gen: Signal<u64>) {
    let query = match normalized_query(&QUERY.read()) {
        Some(q) => q,
        None => return,
    };

    let (client, max_results) = {
        let core = CORE.read();
        match core.as_ref() {
            Some(core) => (core.client.clone(), core.max_results),
            None => return,
        }
    };

    let gen = *request_gen.read() + 1;
    *request_gen.write() = gen;
    *SEARCH.write() = SearchState::Loading;

    spawn(async move {
        let result = client.search(&query, max_results).await;

        // A newer search was issued while this one was in flight
        if *request_gen.read() != gen {
            tracing::debug!(gen, "discarding stale search response");
            return;
        }

        *SEARCH.write() = match result {
            Ok(data) => SearchState::Success(data),
            Err(err) => SearchState::Failed(display_error(&err)),
        };
    });
}

/// Trimmed query text, or `None` when there is nothing to search for.
fn normalized_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Error message for display, with a generic fallback for blank messages.
fn display_error(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    if msg.trim().is_empty() {
        "search request failed".to_string()
    } else {
        msg
    }
}
