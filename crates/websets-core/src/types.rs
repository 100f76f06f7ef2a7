//! Core types for websets-core.
//!
//! This module defines the record shapes held by the dataset store: the
//! [`EngineerRecord`] and [`CompanyRecord`] literals, the untagged [`Record`]
//! wrapper that the query layer passes around, and the [`RecordKind`]
//! discriminant that every lookup pairs with an id.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One engineer in the sample dataset.
///
/// Every field except `id` and `name` is optional. Absent fields are omitted
/// from the JSON representation rather than rendered as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineerRecord {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Graduation year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<u16>,
    /// Free-text label, e.g. `"Lead, Senior"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Comma-separated free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

/// One company in the sample dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Cohort label, e.g. `"W23"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    /// Free text, e.g. `"Active"` or `"Acquired"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Comma-separated free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industries: Option<String>,
}

/// A record of either kind. Serialises as the bare record object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Engineer(EngineerRecord),
    Company(CompanyRecord),
}

impl Record {
    pub fn id(&self) -> u64 {
        match self {
            Record::Engineer(e) => e.id,
            Record::Company(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Record::Engineer(e) => &e.name,
            Record::Company(c) => &c.name,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Engineer(_) => RecordKind::Engineer,
            Record::Company(_) => RecordKind::Company,
        }
    }

    /// The fields a search query is matched against, in a fixed order.
    ///
    /// Engineers: name, position, company, skills.
    /// Companies: name, description, industries.
    pub fn searchable_fields(&self) -> Vec<Option<&str>> {
        match self {
            Record::Engineer(e) => vec![
                Some(e.name.as_str()),
                e.position.as_deref(),
                e.company.as_deref(),
                e.skills.as_deref(),
            ],
            Record::Company(c) => vec![
                Some(c.name.as_str()),
                c.description.as_deref(),
                c.industries.as_deref(),
            ],
        }
    }
}

impl From<EngineerRecord> for Record {
    fn from(record: EngineerRecord) -> Self {
        Record::Engineer(record)
    }
}

impl From<CompanyRecord> for Record {
    fn from(record: CompanyRecord) -> Self {
        Record::Company(record)
    }
}

/// Which dataset an operation targets.
///
/// Search historically spelled the discriminator in the plural
/// (`engineers`, `companies`) and enrichment in the singular (`engineer`,
/// `company`). [`RecordKind::from_str`] accepts both spellings everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Engineer,
    Company,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Engineer, RecordKind::Company];
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Engineer => write!(f, "engineer"),
            RecordKind::Company => write!(f, "company"),
        }
    }
}

/// Returned when a kind string names neither dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised record kind {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "engineer" | "engineers" => Ok(RecordKind::Engineer),
            "company" | "companies" => Ok(RecordKind::Company),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}
