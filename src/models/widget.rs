//! Widget model
//!
//! An embeddable calculator widget, looked up by numeric id or by its key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An embeddable widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Assigned by the repository on first save
    pub id: Option<i64>,
    /// Unique public key used in embed code
    pub key: String,
    pub name: String,
    pub theme: Option<String>,
    pub config: Option<Map<String, Value>>,
    /// Domains allowed to embed this widget. `None` or empty allows all.
    /// Entries may use a `*.example.com` wildcard.
    pub allowed_domains: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Widget {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            key: key.into(),
            name: name.into(),
            theme: None,
            config: None,
            allowed_domains: None,
            created_at: None,
            updated_at: None,
            is_active: true,
        }
    }

    /// Whether `domain` may embed this widget.
    ///
    /// The domain is lower-cased with any scheme and port removed before it
    /// is compared against the allowlist.
    pub fn allows_domain(&self, domain: &str) -> bool {
        let allowed = match &self.allowed_domains {
            Some(list) if !list.is_empty() => list,
            _ => return true,
        };

        let host = normalize_domain(domain);

        allowed.iter().any(|entry| {
            let entry = entry.to_lowercase();
            if host == entry {
                return true;
            }
            match entry.strip_prefix("*.") {
                Some(base) => host == base || host.ends_with(&format!(".{}", base)),
                None => false,
            }
        })
    }
}

fn normalize_domain(domain: &str) -> String {
    let lower = domain.to_lowercase();
    let without_scheme = match lower.split_once("://") {
        Some((_, rest)) => rest,
        None => lower.as_str(),
    };
    let host = without_scheme.split(':').next().unwrap_or(without_scheme);
    host.to_string()
}
