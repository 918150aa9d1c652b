//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Outbound SMTP relay settings.
#[derive(Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Relay host; `None` means mail is logged instead of sent
    pub host: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Upgrade the connection with STARTTLS
    pub starttls: bool,
}

impl SmtpConfig {
    pub fn is_configured(&self) -> bool {
        self.host.as_deref().is_some_and(|h| !h.is_empty())
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("starttls", &self.starttls)
            .finish()
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 587,
            username: None,
            password: None,
            starttls: true,
        }
    }
}

/// Identity that outgoing mail is sent as.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SenderConfig {
    /// Display name, also used as the brand in templates
    pub name: String,
    pub address: String,
}

impl SenderConfig {
    /// `"Name" <address>` form for the From header
    pub fn mailbox(&self) -> String {
        format!("\"{}\" <{}>", self.name, self.address)
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            name: "LifeMate".to_string(),
            address: "noreply@lifemate.com".to_string(),
        }
    }
}
