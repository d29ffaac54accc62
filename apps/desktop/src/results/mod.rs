//! Results panel — renders the search lifecycle as a pure function of state.

mod cards;

use dioxus::prelude::*;

use crate::state::*;
use cards::{CardData, CardSection, SummarySection};

#[component]
pub fn ResultsView() -> Element {
    let search = SEARCH.read();

    match &*search {
        SearchState::Idle => rsx! {
            div {
                class: "results-empty",
                span { "Type a query to search arXiv, news, and blogs." }
            }
        },
        SearchState::Loading => rsx! {
            div {
                class: "results-loading",
                div { class: "spinner" }
                span { "Searching..." }
            }
        },
        SearchState::Failed(msg) => rsx! {
            div {
                class: "results-error",
                "{msg}"
            }
        },
        SearchState::Success(data) => {
            let summary = data.summary.clone().unwrap_or_default();
            let arxiv: Vec<CardData> = data.arxiv.iter().map(CardData::from).collect();
            let news: Vec<CardData> = data.news.iter().map(CardData::from).collect();
            let blogs: Vec<CardData> = data.blogs.iter().map(CardData::from).collect();

            rsx! {
                div {
                    class: "results",
                    SummarySection { summary }
                    CardSection { heading: "arXiv", cards: arxiv }
                    CardSection { heading: "News", cards: news }
                    CardSection { heading: "Blogs", cards: blogs }
                }
            }
        }
    }
}
