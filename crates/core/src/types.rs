//! Wire types for the Search Service response.
//!
//! The backend emits schemaless JSON dicts, so every field is optional and
//! defaulted; callers render defensively. Papers and blogs carry their
//! outbound address under `link`, news items under `url` — the `href()`
//! accessors hide that asymmetry.

use serde::{Deserialize, Serialize};

/// Filter out `Some("")` so the UI never emits an empty anchor href.
fn nonempty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Response payload
// ---------------------------------------------------------------------------

/// Full `/search` response: generated summary plus three categorized lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchResponse {
    pub summary: Option<String>,
    pub arxiv: Vec<Paper>,
    pub news: Vec<NewsItem>,
    pub blogs: Vec<BlogPost>,
}

impl ResearchResponse {
    pub fn is_empty(&self) -> bool {
        self.arxiv.is_empty() && self.news.is_empty() && self.blogs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Result items
// ---------------------------------------------------------------------------

/// One arXiv entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paper {
    pub source: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
}

impl Paper {
    pub fn href(&self) -> Option<&str> {
        nonempty(&self.link)
    }
}

/// One news article. The backend names the address field `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub source: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub url: Option<String>,
    pub published: Option<String>,
}

impl NewsItem {
    pub fn href(&self) -> Option<&str> {
        nonempty(&self.url)
    }
}

/// One blog post from the backend's RSS feeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub source: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
}

impl BlogPost {
    pub fn href(&self) -> Option<&str> {
        nonempty(&self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_deserializes() {
        let json = r#"{
            "summary": "Recent work clusters around routing.",
            "arxiv": [{
                "source": "arXiv",
                "title": "Mixture-of-Experts routing",
                "summary": "We study...",
                "link": "https://arxiv.org/abs/2501.01234",
                "published": "2025-01-15T12:00:00Z"
            }],
            "news": [{
                "source": "News: BBC",
                "title": "AI headline",
                "summary": "Coverage...",
                "url": "https://example.com/article",
                "published": "2025-01-16T08:00:00Z"
            }],
            "blogs": []
        }"#;
        let resp: ResearchResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(
            resp.summary.as_deref(),
            Some("Recent work clusters around routing.")
        );
        assert_eq!(resp.arxiv.len(), 1);
        assert_eq!(
            resp.arxiv[0].href(),
            Some("https://arxiv.org/abs/2501.01234")
        );
        assert_eq!(resp.news[0].href(), Some("https://example.com/article"));
        assert!(resp.blogs.is_empty());
    }

    #[test]
    fn missing_fields_default() {
        let resp: ResearchResponse = serde_json::from_str("{}").expect("parse");
        assert!(resp.summary.is_none());
        assert!(resp.is_empty());
    }

    #[test]
    fn null_summary_is_none() {
        let resp: ResearchResponse =
            serde_json::from_str(r#"{"summary": null, "arxiv": [], "news": [], "blogs": []}"#)
                .expect("parse");
        assert!(resp.summary.is_none());
    }

    #[test]
    fn item_with_unknown_fields_still_parses() {
        // The backend is free to add fields; we only read the ones we render.
        let json = r#"{"arxiv": [{"title": "T", "pdf_url": "x", "authors": ["A"]}]}"#;
        let resp: ResearchResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(resp.arxiv[0].title.as_deref(), Some("T"));
        assert!(resp.arxiv[0].href().is_none());
    }

    #[test]
    fn empty_link_yields_no_href() {
        let paper = Paper {
            link: Some("   ".into()),
            ..Default::default()
        };
        assert!(paper.href().is_none());
    }
}
