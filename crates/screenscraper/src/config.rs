//! Client configuration.
//!
//! Credentials come from the caller, either directly through
//! [`ClientConfig::new`] and the `with_*` methods, or from the
//! `SCREENSCRAPER_*` environment variables via [`ClientConfig::from_env`].

use std::fmt;
use std::time::Duration;

use crate::error::Error;

const DEFAULT_SOFTWARE_NAME: &str = "retroscrape";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_MAX_REQUESTS_PER_DAY: u32 = 10_000;
const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_DEV_ID: &str = "SCREENSCRAPER_DEV_ID";
pub const ENV_DEV_PASSWORD: &str = "SCREENSCRAPER_DEV_PASSWORD";
pub const ENV_USER_ID: &str = "SCREENSCRAPER_USER_ID";
pub const ENV_USER_PASSWORD: &str = "SCREENSCRAPER_USER_PASSWORD";
pub const ENV_SOFTWARE_NAME: &str = "SCREENSCRAPER_SOFTNAME";
pub const ENV_LANGUAGE: &str = "SCREENSCRAPER_LANGUAGE";

/// Settings for a [`Client`](crate::Client). Fixed once the client is built.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub dev_id: String,
    pub dev_password: String,
    pub user_id: Option<String>,
    pub user_password: Option<String>,
    /// Sent as `softname` and in the `User-Agent` header.
    pub software_name: String,
    /// Preferred locale for localized text (`en`, `fr`, `de`, ...).
    pub language: String,
    /// Advisory only; never enforced.
    pub max_requests_per_day: u32,
    /// Minimum gap between two outbound calls.
    pub request_delay: Duration,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a config with developer credentials and default settings.
    pub fn new(dev_id: impl Into<String>, dev_password: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            dev_password: dev_password.into(),
            user_id: None,
            user_password: None,
            software_name: DEFAULT_SOFTWARE_NAME.into(),
            language: DEFAULT_LANGUAGE.into(),
            max_requests_per_day: DEFAULT_MAX_REQUESTS_PER_DAY,
            request_delay: DEFAULT_REQUEST_DELAY,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads credentials from the environment.
    ///
    /// `SCREENSCRAPER_DEV_ID` and `SCREENSCRAPER_DEV_PASSWORD` are required.
    /// User credentials, software name and language are picked up when set.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let dev_id = get(ENV_DEV_ID).ok_or_else(|| Error::Config(format!("{ENV_DEV_ID} not set")))?;
        let dev_password = get(ENV_DEV_PASSWORD)
            .ok_or_else(|| Error::Config(format!("{ENV_DEV_PASSWORD} not set")))?;

        let mut config = Self::new(dev_id, dev_password);
        config.user_id = get(ENV_USER_ID);
        config.user_password = get(ENV_USER_PASSWORD);
        if let Some(name) = get(ENV_SOFTWARE_NAME) {
            config.software_name = name;
        }
        if let Some(lang) = get(ENV_LANGUAGE) {
            config.language = lang;
        }
        Ok(config)
    }

    /// Sets end-user credentials (registered ScreenScraper account).
    pub fn with_user(mut self, user_id: impl Into<String>, password: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self.user_password = Some(password.into());
        self
    }

    pub fn with_software_name(mut self, name: impl Into<String>) -> Self {
        self.software_name = name.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_max_requests_per_day(mut self, max: u32) -> Self {
        self.max_requests_per_day = max;
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User credentials, only when both halves are configured.
    pub(crate) fn user_credentials(&self) -> Option<(&str, &str)> {
        match (self.user_id.as_deref(), self.user_password.as_deref()) {
            (Some(id), Some(pw)) if !id.is_empty() && !pw.is_empty() => Some((id, pw)),
            _ => None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("dev_id", &self.dev_id)
            .field("dev_password", &"***")
            .field("user_id", &self.user_id)
            .field("user_password", &self.user_password.as_ref().map(|_| "***"))
            .field("software_name", &self.software_name)
            .field("language", &self.language)
            .field("max_requests_per_day", &self.max_requests_per_day)
            .field("request_delay", &self.request_delay)
            .field("timeout", &self.timeout)
            .finish()
    }
}
