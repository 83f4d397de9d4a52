//! Typed HTTP client for the Skald scraper service.
//!
//! The scraper service runs out of process and exposes a small HTTP API for
//! starting scrape jobs, polling their status, validating feed URLs, and
//! fetching the contents scraped for a client. This crate only marshals
//! requests and responses; scheduling and crawling live in the service itself.

pub mod client;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use error::Error;
