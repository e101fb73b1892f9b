//! Crawling and extraction for moltbook.com.
//!
//! - Item model and assembly rules (`item`)
//! - The browser-backed extraction pass (`crawl`)
//!
//! The pass is strictly linear: build driver, navigate, wait for presence,
//! settle, query the target selector, extract per element, close the driver.
//! Every failure collapses to an empty result list at the `crawl` boundary.

pub mod crawl;
pub mod item;
