//! Environment-driven suite configuration.
//!
//! Every knob comes from the process environment with a defaulting-only
//! policy: unknown or missing values fall back to a sensible default and
//! never abort the run. `from_vars` is the pure core so the parsing can be
//! tested without touching the real environment.

use std::time::Duration;

/// Default base URL of the storefront under test
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// Default page-load/navigation wait budget (overridden by `TIMEOUT`)
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 60_000;

/// Default number of concurrently running scenarios
pub const DEFAULT_PARALLEL: usize = 2;

/// Browser flavor requested via `BROWSER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserFlavor {
    /// Chromium over CDP (the only engine the driver speaks)
    #[default]
    Chromium,
    /// Firefox (parsed, falls back to Chromium at launch)
    Firefox,
    /// WebKit (parsed, falls back to Chromium at launch)
    Webkit,
}

impl BrowserFlavor {
    /// Parse a flavor name, defaulting to Chromium for unknown values
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "firefox" => Self::Firefox,
            "webkit" => Self::Webkit,
            _ => Self::Chromium,
        }
    }

    /// Canonical name for logging and report metadata
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chromium => "chromium",
            Self::Firefox => "firefox",
            Self::Webkit => "webkit",
        }
    }
}

/// Suite configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Requested browser flavor (`BROWSER`)
    pub flavor: BrowserFlavor,
    /// Headless mode (`HEADLESS`, default true)
    pub headless: bool,
    /// Pause after each mutating action in milliseconds (`SLOW_MO`)
    pub slow_mo_ms: u64,
    /// Video capture requested (`VIDEO=on`); parsed for contract
    /// compatibility, the CDP driver cannot record
    pub video: bool,
    /// Page-load/navigation wait budget in milliseconds (`TIMEOUT`)
    pub load_timeout_ms: u64,
    /// Base URL of the site under test (`BASE_URL`)
    pub base_url: String,
    /// Environment label for reports (`ENV`)
    pub env_label: String,
    /// Concurrent scenario cap for the runner (`PARALLEL`)
    pub parallel: usize,
    /// Emit a JUnit XML report alongside the JSON one
    /// (`REPORT_FORMAT=junit`); JSON output is always written
    pub junit_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flavor: BrowserFlavor::Chromium,
            headless: true,
            slow_mo_ms: 0,
            video: false,
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
            base_url: DEFAULT_BASE_URL.to_string(),
            env_label: "QA".to_string(),
            parallel: DEFAULT_PARALLEL,
            junit_report: false,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            flavor: var("BROWSER")
                .map(|v| BrowserFlavor::parse(&v))
                .unwrap_or_default(),
            headless: var("HEADLESS").map_or(true, |v| v != "false"),
            slow_mo_ms: var("SLOW_MO")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            video: var("VIDEO").is_some_and(|v| v == "on"),
            load_timeout_ms: var("TIMEOUT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOAD_TIMEOUT_MS),
            base_url: var("BASE_URL").unwrap_or(defaults.base_url),
            env_label: var("ENV").unwrap_or(defaults.env_label),
            parallel: var("PARALLEL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PARALLEL),
            junit_report: var("REPORT_FORMAT")
                .is_some_and(|v| v.eq_ignore_ascii_case("junit")),
        }
    }

    /// Slow-motion pause as a [`Duration`]
    #[must_use]
    pub const fn slow_mo(&self) -> Duration {
        Duration::from_millis(self.slow_mo_ms)
    }

    /// Page-load wait budget as a [`Duration`]
    #[must_use]
    pub const fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    /// Join a path onto the configured base URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
