//! Common types and utilities shared across Moltbook crates.
//!
//! This crate defines the crawl configuration, the settle-wait strategy,
//! observability helpers, and shared error types used throughout the
//! workspace. It is intentionally lightweight so that all crates can depend
//! on it without introducing heavy transitive costs.
//!
//! # Overview
//!
//! - [`CrawlConfig`]: runtime configuration for a crawl pass
//! - [`SettleWait`]: how long to let client-side rendering settle
//! - [`observability`]: centralised tracing/logging initialisation
//! - [`MoltbookError`] and [`Result`]: shared error handling
//!
//! # Examples
//!
//! Constructing a default configuration:
//!
//! ```rust
//! use moltbook_common::{CrawlConfig, SettleWait};
//!
//! let config = CrawlConfig::default();
//! assert!(config.headless);
//! assert_eq!(config.wait_timeout_secs, 15);
//! assert_eq!(
//!     config.settle,
//!     SettleWait::Stabilize { poll_interval_ms: 500, max_attempts: 6 }
//! );
//! ```
use serde::{Deserialize, Serialize};

pub mod observability;

/// Default WebDriver endpoint (Chromedriver).
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Runtime configuration for a crawl pass.
///
/// The loader in `moltbook-config` resolves file and environment overlays
/// onto these defaults; CLI flags are applied on top by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Whether to run the browser without a visible window.
    pub headless: bool,
    /// Browser window dimensions, formatted as `"<width>,<height>"`.
    pub window_size: String,
    /// Browser UI locale, passed through `--lang`.
    pub locale: String,
    /// WebDriver endpoint the session connects to.
    pub webdriver_url: String,
    /// Upper bound for the target-selector presence wait, in seconds.
    pub wait_timeout_secs: u64,
    /// Strategy used to let client-side rendering settle before the final
    /// element query.
    pub settle: SettleWait,
    /// Preferred output format for rendered results.
    pub output_format: OutputFormat,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: "1920,1080".to_string(),
            locale: "ko-KR".to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            wait_timeout_secs: 15,
            settle: SettleWait::default(),
            output_format: OutputFormat::Text,
        }
    }
}

/// How long to pause between the presence wait and the element query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SettleWait {
    /// Unconditional pause for `secs` seconds.
    Fixed { secs: u64 },
    /// Poll the target-selector match count every `poll_interval_ms`
    /// milliseconds until two consecutive polls agree, giving up after
    /// `max_attempts` polls.
    Stabilize {
        poll_interval_ms: u64,
        max_attempts: u32,
    },
}

impl Default for SettleWait {
    fn default() -> Self {
        Self::Stabilize {
            poll_interval_ms: 500,
            max_attempts: 6,
        }
    }
}

/// Preferred output format for rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Error types used across the Moltbook system.
#[derive(thiserror::Error, Debug)]
pub enum MoltbookError {
    /// A driver (browser, WebDriver session) reported an error.
    #[error("Driver error: {0}")]
    Driver(#[from] anyhow::Error),

    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenient alias for results that use [`MoltbookError`].
pub type Result<T> = std::result::Result<T, MoltbookError>;
