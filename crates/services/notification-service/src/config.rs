//! Notification service configuration.

use std::env;

use chrono::NaiveDate;
use common::{SenderConfig, SmtpConfig};

use crate::templates::RenderContext;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Notification service configuration.
#[derive(Debug, Clone)]
pub struct NotificationServiceConfig {
    /// Web frontend that links in emails point at, without a trailing slash
    pub base_url: String,
    pub sender: SenderConfig,
    pub smtp: SmtpConfig,
}

impl NotificationServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `FRONTEND_URL`    | `http://localhost:3000`  |
    /// | `EMAIL_FROM`      | `noreply@lifemate.com`   |
    /// | `EMAIL_FROM_NAME` | `LifeMate`               |
    /// | `EMAIL_HOST`      | unset, mail is logged    |
    /// | `EMAIL_PORT`      | `587`                    |
    /// | `EMAIL_USER`      | unset                    |
    /// | `EMAIL_PASS`      | unset                    |
    /// | `EMAIL_TLS`       | `true` (STARTTLS)        |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: var("FRONTEND_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            sender: SenderConfig {
                name: var("EMAIL_FROM_NAME").unwrap_or(defaults.sender.name),
                address: var("EMAIL_FROM").unwrap_or(defaults.sender.address),
            },
            smtp: SmtpConfig {
                host: var("EMAIL_HOST"),
                port: var("EMAIL_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.smtp.port),
                username: var("EMAIL_USER"),
                password: var("EMAIL_PASS"),
                starttls: var("EMAIL_TLS")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(defaults.smtp.starttls),
            },
        }
    }

    /// Values every template renders against
    pub fn render_context(&self, today: NaiveDate) -> RenderContext {
        RenderContext {
            base_url: self.base_url.clone(),
            brand_name: self.sender.name.clone(),
            today,
        }
    }
}

impl Default for NotificationServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FRONTEND_URL.to_string(),
            sender: SenderConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}
