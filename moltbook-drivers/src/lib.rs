//! Driver layer for browser automation.
//!
//! This crate exposes the browser driver and page/element helpers used by
//! the crawler to collect client-rendered content.
//!
//! - [`moltbook_browser::driver::MoltbookDriver`]: WebDriver client wrapper
//! - [`moltbook_browser::page::MoltbookPage`]: presence waits and DOM queries
//! - [`moltbook_browser::stealth`]: browser arguments and JS evasions
pub mod moltbook_browser;
