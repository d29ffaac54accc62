//! Core library for ResearchScope — types and HTTP client for the external
//! Search Service (`GET /search`), which aggregates arXiv, news, and blog
//! results and returns them with a generated summary.
//!
//! The aggregation and summarization themselves live in the backend; this
//! crate only speaks its wire format.

pub mod client;
pub mod config;
pub mod types;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use types::{BlogPost, NewsItem, Paper, ResearchResponse};
