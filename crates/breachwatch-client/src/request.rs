//! URL composition for lookup requests.

use crate::error::{LookupError, Result};
use breachwatch_core::ConfigError;
use std::fmt;
use url::Url;

/// The read operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// All breaches an account appears in
    BreachedAccount,
    /// Every breach in the system
    Breaches,
    /// A single breach by its stable name
    Breach,
    /// All pastes an email address appears in
    PasteAccount,
}

impl Operation {
    /// First path segment after the service root.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::BreachedAccount => "breachedaccount",
            Self::Breaches => "breaches",
            Self::Breach => "breach",
            Self::PasteAccount => "pasteaccount",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Everything that varies between lookup requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Which endpoint to call
    pub operation: Operation,
    /// Second path segment; may be empty
    pub identifier: String,
    /// Sent as `domain` when non-empty
    pub domain_filter: String,
    /// When false, `truncateResponse=false` asks for full records
    pub truncate: bool,
    /// When true, `includeUnverified=true` is sent
    pub include_unverified: bool,
}

impl LookupRequest {
    /// Breaches for an account.
    #[must_use]
    pub fn breached_account(
        account: impl Into<String>,
        domain_filter: impl Into<String>,
        truncate: bool,
        include_unverified: bool,
    ) -> Self {
        Self {
            operation: Operation::BreachedAccount,
            identifier: account.into(),
            domain_filter: domain_filter.into(),
            truncate,
            include_unverified,
        }
    }

    /// All breaches, optionally limited to a domain.
    #[must_use]
    pub fn breaches(domain_filter: impl Into<String>) -> Self {
        Self {
            operation: Operation::Breaches,
            identifier: String::new(),
            domain_filter: domain_filter.into(),
            truncate: false,
            include_unverified: false,
        }
    }

    /// A single breach by name.
    #[must_use]
    pub fn breach(name: impl Into<String>) -> Self {
        Self {
            operation: Operation::Breach,
            identifier: name.into(),
            domain_filter: String::new(),
            truncate: false,
            include_unverified: false,
        }
    }

    /// Pastes for an email address.
    #[must_use]
    pub fn paste_account(email: impl Into<String>) -> Self {
        Self {
            operation: Operation::PasteAccount,
            identifier: email.into(),
            domain_filter: String::new(),
            truncate: false,
            include_unverified: false,
        }
    }

    /// Query parameters in the order they are sent.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if !self.domain_filter.is_empty() {
            pairs.push(("domain", self.domain_filter.as_str()));
        }
        if !self.truncate {
            pairs.push(("truncateResponse", "false"));
        }
        if self.include_unverified {
            pairs.push(("includeUnverified", "true"));
        }
        pairs
    }

    /// Build the full request URL under `base`.
    ///
    /// The identifier is percent-encoded as a single path segment, so an
    /// empty identifier leaves a trailing slash.
    ///
    /// # Errors
    /// An identifier of `.` or `..` fails with [`LookupError::InvalidFormat`].
    /// URL parsing drops dot segments (including `%2E` forms), so such an
    /// identifier can never reach the service.
    pub fn url(&self, base: &Url) -> Result<Url> {
        if is_dot_segment(&self.identifier) {
            return Err(LookupError::InvalidFormat);
        }

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                LookupError::Config(ConfigError::InvalidValue {
                    field: "base_url".to_string(),
                    reason: format!("'{base}' cannot carry path segments"),
                })
            })?
            .pop_if_empty()
            .push(self.operation.path_segment())
            .push(&self.identifier);

        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }
}

fn is_dot_segment(identifier: &str) -> bool {
    matches!(identifier, "." | "..")
}
