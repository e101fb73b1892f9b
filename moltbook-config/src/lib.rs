//! Loader for crawler configuration with YAML + environment overlays.
//!
//! Precedence, lowest to highest: built-in defaults, attached files, then
//! `MOLTBOOK_`-prefixed environment variables. Nested keys in the
//! environment are joined with `__`, e.g. `MOLTBOOK_BROWSER__HEADLESS=false`.
use config::{Config, ConfigError, Environment, File, FileFormat};
use moltbook_common::{CrawlConfig, OutputFormat, SettleWait};
use serde::Deserialize;
use std::path::Path;

/// Partial on-disk schema. Anything omitted falls back to
/// [`CrawlConfig::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MoltbookFileConfig {
    pub browser: BrowserSection,
    pub crawl: CrawlSection,
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BrowserSection {
    pub headless: Option<bool>,
    pub window_size: Option<String>,
    pub locale: Option<String>,
    pub webdriver_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CrawlSection {
    pub wait_timeout_secs: Option<u64>,
    pub settle: Option<SettleWait>,
}

impl MoltbookFileConfig {
    /// Overlay this partial schema onto the built-in defaults.
    fn resolve(self) -> Result<CrawlConfig, ConfigError> {
        let mut cfg = CrawlConfig::default();
        if let Some(headless) = self.browser.headless {
            cfg.headless = headless;
        }
        if let Some(window_size) = self.browser.window_size {
            validate_window_size(&window_size)?;
            cfg.window_size = window_size;
        }
        if let Some(locale) = self.browser.locale {
            cfg.locale = locale;
        }
        if let Some(url) = self.browser.webdriver_url {
            cfg.webdriver_url = url;
        }
        if let Some(secs) = self.crawl.wait_timeout_secs {
            cfg.wait_timeout_secs = secs;
        }
        if let Some(settle) = self.crawl.settle {
            cfg.settle = settle;
        }
        if let Some(output) = self.output {
            cfg.output_format = output;
        }
        Ok(cfg)
    }
}

fn validate_window_size(raw: &str) -> Result<(), ConfigError> {
    let parts: Vec<_> = raw.split(',').collect();
    let ok = parts.len() == 2
        && parts
            .iter()
            .all(|part| part.trim().parse::<u32>().is_ok());
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Message(format!(
            "window_size must be \"<width>,<height>\", got {raw:?}"
        )))
    }
}

/// Builder hiding the `config` crate wiring (YAML files + env overrides).
pub struct MoltbookConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for MoltbookConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MoltbookConfigLoader {
    /// Start with an empty loader; the environment overlay is applied at
    /// [`load`](Self::load) time so it always wins over files.
    ///
    /// ```
    /// use moltbook_config::MoltbookConfigLoader;
    ///
    /// let config = MoltbookConfigLoader::new().load().expect("defaults load");
    /// assert!(config.headless);
    /// assert_eq!(config.wait_timeout_secs, 15);
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Attach a config file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Attach the per-user file (`<config dir>/moltbook/moltbook.yaml`) when
    /// it exists; absence is not an error.
    pub fn with_default_file(mut self) -> Self {
        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("moltbook").join("moltbook.yaml");
            self.builder = self.builder.add_source(File::from(path).required(false));
        }
        self
    }

    /// Merge an inline YAML snippet; used by tests and the CLI.
    ///
    /// ```
    /// use moltbook_config::MoltbookConfigLoader;
    ///
    /// let config = MoltbookConfigLoader::new()
    ///     .with_yaml_str("browser:\n  headless: false\n")
    ///     .load()
    ///     .expect("valid config");
    /// assert!(!config.headless);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Merge all sources and resolve them over the built-in defaults.
    pub fn load(self) -> Result<CrawlConfig, ConfigError> {
        let merged: MoltbookFileConfig = self
            .builder
            .add_source(
                Environment::with_prefix("MOLTBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        merged.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_width_comma_height() {
        assert!(validate_window_size("1920,1080").is_ok());
        assert!(validate_window_size("1280, 800").is_ok());
    }

    #[test]
    fn rejects_missing_height() {
        assert!(validate_window_size("1920").is_err());
    }

    #[test]
    fn rejects_non_numeric_dimensions() {
        assert!(validate_window_size("wide,tall").is_err());
    }
}
