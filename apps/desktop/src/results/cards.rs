//! Result cards — one presentational shape for all three categories.

use dioxus::prelude::*;
use researchscope_core::{BlogPost, NewsItem, Paper};

/// Shown for an empty list or a missing summary.
const PLACEHOLDER: &str = "-";

/// Everything a card renders, already defaulted.
#[derive(Clone, PartialEq)]
pub struct CardData {
    pub title: String,
    pub href: String,
    pub body: String,
    pub published: String,
    pub source: String,
}

fn card(
    title: &Option<String>,
    href: Option<&str>,
    body: &Option<String>,
    published: &Option<String>,
    source: &Option<String>,
) -> CardData {
    let title = title.as_deref().map(str::trim).unwrap_or_default();
    CardData {
        title: if title.is_empty() {
            "(untitled)".to_string()
        } else {
            title.to_string()
        },
        href: href.unwrap_or_default().to_string(),
        body: body.clone().unwrap_or_default(),
        published: published.clone().unwrap_or_default(),
        source: source.clone().unwrap_or_default(),
    }
}

impl From<&Paper> for CardData {
    fn from(p: &Paper) -> Self {
        card(&p.title, p.href(), &p.summary, &p.published, &p.source)
    }
}

impl From<&NewsItem> for CardData {
    fn from(n: &NewsItem) -> Self {
        card(&n.title, n.href(), &n.summary, &n.published, &n.source)
    }
}

impl From<&BlogPost> for CardData {
    fn from(b: &BlogPost) -> Self {
        card(&b.title, b.href(), &b.summary, &b.published, &b.source)
    }
}

/// Generated summary, or the placeholder when the backend sent none.
#[component]
pub fn SummarySection(summary: String) -> Element {
    rsx! {
        section {
            class: "summary-section",
            h2 { class: "section-heading", "Summary" }
            if summary.trim().is_empty() {
                p { class: "placeholder", "{PLACEHOLDER}" }
            } else {
                p { class: "summary-text", "{summary}" }
            }
        }
    }
}

/// One category section — cards, or the placeholder when the list is empty.
#[component]
pub fn CardSection(heading: String, cards: Vec<CardData>) -> Element {
    rsx! {
        section {
            class: "card-section",
            h2 { class: "section-heading", "{heading}" }
            if cards.is_empty() {
                p { class: "placeholder", "{PLACEHOLDER}" }
            } else {
                div {
                    class: "card-list",
                    for card in cards.iter() {
                        ResultCard { card: card.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultCard(card: CardData) -> Element {
    rsx! {
        div {
            class: "card",
            if card.href.is_empty() {
                span { class: "card-title", "{card.title}" }
            } else {
                a {
                    class: "card-title",
                    href: "{card.href}",
                    target: "_blank",
                    "{card.title}"
                }
            }
            if !card.body.is_empty() {
                p { class: "card-body", "{card.body}" }
            }
            div {
                class: "card-meta",
                if !card.source.is_empty() {
                    span { class: "card-source", "{card.source}" }
                }
                if !card.source.is_empty() && !card.published.is_empty() {
                    span { class: "card-sep", "\u{00B7}" }
                }
                if !card.published.is_empty() {
                    span { class: "card-date", "{card.published}" }
                }
            }
        }
    }
}
