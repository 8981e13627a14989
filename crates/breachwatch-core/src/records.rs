//! Breach and paste records returned by the lookup API.
//!
//! Field names on the wire are PascalCase. Missing or `null` fields decode to
//! their default and default-valued fields are left out when serializing, so
//! a truncated breach (name only) round-trips as `{"Name":"..."}`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// One breach event.
///
/// `name` is the stable key for a breach; `title` is a display name that
/// may change over time. Use [`BreachRecord::same_breach`] rather than `==`
/// when asking whether two records describe the same incident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct BreachRecord {
    /// Stable identifier, unique per breach
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Display name
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Domain of the breached site
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub domain: String,

    /// Date the breach occurred, as sent by the service
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub breach_date: String,

    /// Date the breach was added to the service
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub added_date: String,

    /// Date the breach was last modified
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub modified_date: String,

    /// Number of accounts loaded into the service for this breach
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_zero")]
    pub pwn_count: u64,

    /// HTML description of the incident
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Categories of data exposed, in service order
    #[serde(deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub data_classes: Vec<String>,

    /// Breach has been verified as legitimate
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_false")]
    pub is_verified: bool,

    /// Breach is known to be fabricated
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_false")]
    pub is_fabricated: bool,

    /// Breach is flagged sensitive and hidden from public searches
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_false")]
    pub is_sensitive: bool,

    /// Breach has been retired from the system
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_false")]
    pub is_retired: bool,

    /// Breach is a spam list rather than a compromise
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_false")]
    pub is_spam_list: bool,

    /// URL of the breach logo
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub logo_path: String,
}

impl BreachRecord {
    /// Returns true when every field holds its default value.
    ///
    /// A single-breach lookup that hits a 404 returns this zero value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `other` describes the same breach, compared by `name`.
    #[must_use]
    pub fn same_breach(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// One paste exposure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PasteRecord {
    /// Paste service the paste was found on
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Identifier of the paste within its source
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Title of the paste, often empty
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Date the paste was posted
    #[serde(deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub date: String,

    /// Number of emails found in the paste
    #[serde(deserialize_with = "nullable", skip_serializing_if = "is_zero")]
    pub email_count: u64,
}

/// Collapse records sharing a `name`, keeping the first occurrence.
#[must_use]
pub fn dedup_by_name(records: Vec<BreachRecord>) -> Vec<BreachRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.name.clone()))
        .collect()
}

// The service sends `null` for some paste titles and dates.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &u64) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}
