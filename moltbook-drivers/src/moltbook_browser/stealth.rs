/// Construct the Chrome command-line arguments applied to every session.
///
/// `window_size` is the raw `"<width>,<height>"` string passed through to
/// `--window-size`; `locale` feeds `--lang`.
pub fn build_browser_arguments(window_size: &str, locale: &str) -> Vec<String> {
    vec![
        "--disable-blink-features=AutomationControlled".to_string(),
        "--disable-gpu".to_string(),
        "--no-sandbox".to_string(),
        "--disable-dev-shm-usage".to_string(),
        format!("--window-size={}", window_size),
        format!("--lang={}", locale),
    ]
}

/// JavaScript evasions applied at page load to reduce automation signals.
pub struct StealthScripts;

impl StealthScripts {
    /// Hide the `navigator.webdriver` automation flag.
    pub fn webdriver_evasion() -> &'static str {
        r#"Object.defineProperty(navigator, 'webdriver', { get: () => undefined });"#
    }
}
