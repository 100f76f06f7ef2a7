//! Enrichment: attach synthesized placeholder blocks to a located record.
//!
//! Nothing here talks to a real provider. Every numeric or pick-one value is
//! drawn from an [`EntropySource`], so production output is random while
//! tests can substitute [`ConstantEntropy`] and assert exact values.
//!
//! The enriched copy is handed back to the caller; the store never sees it.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dataset::DataProvider;
use crate::error::{Result, WebsetsError};
use crate::types::{CompanyRecord, EngineerRecord, Record, RecordKind};

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Source of the random values used to fill enrichment blocks.
pub trait EntropySource: Send + Sync {
    /// Uniform integer in `low..=high`.
    fn int_in(&self, low: u32, high: u32) -> u32;
    /// `true` with probability `p`.
    fn chance(&self, p: f64) -> bool;
    /// Uniform index into a collection of `len` items. `len` is never zero.
    fn index(&self, len: usize) -> usize;
}

/// Unseeded thread-local RNG. Output is not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn int_in(&self, low: u32, high: u32) -> u32 {
        rand::thread_rng().gen_range(low..=high)
    }

    fn chance(&self, p: f64) -> bool {
        rand::thread_rng().gen_bool(p.clamp(0.0, 1.0))
    }

    fn index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source: every draw lands at the same relative position
/// `fraction` (clamped to `[0, 1)`) within its range.
///
/// `fraction = 0.0` always yields the low end of each range and `chance(p)`
/// returns `fraction < p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEntropy {
    fraction: f64,
}

impl ConstantEntropy {
    pub fn new(fraction: f64) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0 - f64::EPSILON)
        };
        Self { fraction }
    }

    pub fn low() -> Self {
        Self::new(0.0)
    }

    pub fn high() -> Self {
        Self::new(1.0)
    }
}

impl EntropySource for ConstantEntropy {
    fn int_in(&self, low: u32, high: u32) -> u32 {
        let span = f64::from(high - low + 1);
        (low + (span * self.fraction).floor() as u32).min(high)
    }

    fn chance(&self, p: f64) -> bool {
        self.fraction < p
    }

    fn index(&self, len: usize) -> usize {
        ((len as f64 * self.fraction).floor() as usize).min(len.saturating_sub(1))
    }
}

fn pick(entropy: &dyn EntropySource, options: &[&str]) -> String {
    options[entropy.index(options.len())].to_string()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Enrichment kinds and payloads
// ---------------------------------------------------------------------------

/// A recognised enrichment block name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentKind {
    Github,
    Email,
    Linkedin,
    Funding,
    Team,
    Metrics,
}

impl EnrichmentKind {
    pub const ALL: [EnrichmentKind; 6] = [
        EnrichmentKind::Github,
        EnrichmentKind::Email,
        EnrichmentKind::Linkedin,
        EnrichmentKind::Funding,
        EnrichmentKind::Team,
        EnrichmentKind::Metrics,
    ];

    /// Exact, case-sensitive name match.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichmentKind::Github => "github",
            EnrichmentKind::Email => "email",
            EnrichmentKind::Linkedin => "linkedin",
            EnrichmentKind::Funding => "funding",
            EnrichmentKind::Team => "team",
            EnrichmentKind::Metrics => "metrics",
        }
    }

    /// The record kind this block can be synthesized for.
    pub fn record_kind(&self) -> RecordKind {
        match self {
            EnrichmentKind::Github | EnrichmentKind::Email | EnrichmentKind::Linkedin => {
                RecordKind::Engineer
            }
            EnrichmentKind::Funding | EnrichmentKind::Team | EnrichmentKind::Metrics => {
                RecordKind::Company
            }
        }
    }

    /// Kinds applicable to `kind`, in declaration order.
    pub fn for_record(kind: RecordKind) -> Vec<EnrichmentKind> {
        Self::ALL
            .into_iter()
            .filter(|k| k.record_kind() == kind)
            .collect()
    }
}

impl std::fmt::Display for EnrichmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GithubEnrichment {
    pub url: Option<String>,
    pub repositories: Vec<String>,
    pub contributions: u32,
    pub followers: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailEnrichment {
    pub primary: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedinEnrichment {
    pub url: Option<String>,
    pub connections: u32,
    pub endorsements: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundingEnrichment {
    pub total_raised: String,
    pub rounds: Vec<String>,
    pub investors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamEnrichment {
    pub founders: Vec<String>,
    pub team_size: u32,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsEnrichment {
    pub revenue: String,
    pub users: String,
    pub growth_rate: u32,
}

/// One synthesized block. Serialises as the bare payload object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Enrichment {
    Github(GithubEnrichment),
    Email(EmailEnrichment),
    Linkedin(LinkedinEnrichment),
    Funding(FundingEnrichment),
    Team(TeamEnrichment),
    Metrics(MetricsEnrichment),
}

/// A record plus the blocks synthesized for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: Record,
    /// Keyed in [`EnrichmentKind`] declaration order, whatever order they
    /// were requested in.
    pub enrichments: BTreeMap<EnrichmentKind, Enrichment>,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of an enrichment call, as received on the wire.
///
/// Fields are deliberately loose so that the presence checks below, not the
/// deserializer, decide between "missing" and "not found".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EnrichRequest {
    /// Usually a positive integer, as a JSON number or a numeric string.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Non-string entries are ignored.
    #[serde(default)]
    pub enrichments: Option<Vec<serde_json::Value>>,
}

impl EnrichRequest {
    pub fn new(id: u64, kind: &str) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(kind.to_string()),
            enrichments: None,
        }
    }

    pub fn with_enrichments<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enrichments = Some(
            names
                .into_iter()
                .map(|n| serde_json::Value::String(n.into()))
                .collect(),
        );
        self
    }

    /// The requested id, read as leniently as a form handler would.
    ///
    /// Absent, `null`, `false`, `0` and `""` count as missing. Any other id is
    /// cut down to its leading integer (`1.5` and `"1abc"` both name 1); an
    /// id with no positive leading integer names no record.
    fn id(&self) -> Result<RequestedId> {
        use serde_json::Value;

        let missing = || WebsetsError::invalid("ID and type are required");
        let value = match &self.id {
            None | Some(Value::Null) | Some(Value::Bool(false)) => return Err(missing()),
            Some(Value::String(s)) if s.is_empty() => return Err(missing()),
            Some(Value::Number(n)) => match (n.as_u64(), n.as_f64()) {
                (Some(0), _) => return Err(missing()),
                (Some(id), _) => Some(id),
                (None, Some(f)) if f == 0.0 => return Err(missing()),
                (None, Some(f)) if f.trunc() >= 1.0 && f.trunc() <= u64::MAX as f64 => {
                    Some(f.trunc() as u64)
                }
                _ => None,
            },
            Some(Value::String(s)) => leading_integer(s),
            Some(_) => None,
        };

        let raw = match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Ok(RequestedId { value, raw })
    }

    fn kind(&self) -> Result<&str> {
        match self.kind.as_deref() {
            Some(kind) if !kind.is_empty() => Ok(kind),
            _ => Err(WebsetsError::invalid("ID and type are required")),
        }
    }

    fn requested(&self) -> impl Iterator<Item = &str> {
        self.enrichments
            .iter()
            .flatten()
            .filter_map(serde_json::Value::as_str)
    }
}

/// An id that was present on the request.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RequestedId {
    /// `None` when nothing numeric could be read from it.
    value: Option<u64>,
    /// The id as sent, for error messages.
    raw: String,
}

/// Leading integer of `s`, skipping leading whitespace and honouring a sign
/// and a `0x` prefix. Only positive values are returned.
fn leading_integer(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let value = u64::from_str_radix(&digits[..end], radix).ok()?;
    (!negative && value > 0).then_some(value)
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// Locate the record named by `request` and attach the requested blocks.
///
/// Fails with [`WebsetsError::InvalidArgument`] when id or kind is absent and
/// with [`WebsetsError::NotFound`] for anything else that names no record,
/// including ids that are not numbers at all.
/// Unknown block names, and names for the other record kind, are skipped.
pub fn enrich(
    provider: &dyn DataProvider,
    entropy: &dyn EntropySource,
    request: &EnrichRequest,
) -> Result<EnrichedRecord> {
    let id = request.id()?;
    let raw_kind = request.kind()?;

    let not_found = || WebsetsError::not_found(raw_kind, &id.raw);

    let kind: RecordKind = raw_kind.parse().map_err(|_| not_found())?;
    let record = id
        .value
        .and_then(|value| provider.find(kind, value))
        .ok_or_else(not_found)?;
    let id = record.id();

    let mut enrichments = BTreeMap::new();
    for name in request.requested() {
        let Some(block) = EnrichmentKind::parse(name).filter(|b| b.record_kind() == kind) else {
            tracing::debug!(%kind, id, name, "skipping unrecognised enrichment");
            continue;
        };
        if enrichments.contains_key(&block) {
            continue;
        }
        if let Some(payload) = synthesize(block, record, entropy) {
            enrichments.insert(block, payload);
        }
    }

    tracing::debug!(
        %kind,
        id,
        blocks = ?enrichments.keys().collect::<Vec<_>>(),
        "record enriched"
    );

    Ok(EnrichedRecord {
        record: record.clone(),
        enrichments,
    })
}

fn synthesize(
    block: EnrichmentKind,
    record: &Record,
    entropy: &dyn EntropySource,
) -> Option<Enrichment> {
    match (block, record) {
        (EnrichmentKind::Github, Record::Engineer(e)) => Some(github(e, entropy)),
        (EnrichmentKind::Email, Record::Engineer(e)) => Some(email(e, entropy)),
        (EnrichmentKind::Linkedin, Record::Engineer(e)) => Some(linkedin(e, entropy)),
        (EnrichmentKind::Funding, Record::Company(c)) => Some(funding(c, entropy)),
        (EnrichmentKind::Team, Record::Company(c)) => Some(team(c, entropy)),
        (EnrichmentKind::Metrics, Record::Company(c)) => Some(metrics(c, entropy)),
        _ => None,
    }
}

fn squashed(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect()
}

fn github(e: &EngineerRecord, entropy: &dyn EntropySource) -> Enrichment {
    Enrichment::Github(GithubEnrichment {
        url: e.github_url.clone(),
        repositories: vec![
            format!("{}-api", squashed(&e.name)),
            "awesome-project".to_string(),
        ],
        contributions: entropy.int_in(100, 1099),
        followers: entropy.int_in(10, 509),
    })
}

fn email(e: &EngineerRecord, entropy: &dyn EntropySource) -> Enrichment {
    let local = e
        .name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");
    let domain = e
        .company
        .as_deref()
        .map(squashed)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "example".to_string());

    Enrichment::Email(EmailEnrichment {
        primary: format!("{local}@{domain}.com"),
        verified: entropy.chance(0.7),
    })
}

fn linkedin(e: &EngineerRecord, entropy: &dyn EntropySource) -> Enrichment {
    Enrichment::Linkedin(LinkedinEnrichment {
        url: e.linkedin_url.clone(),
        connections: entropy.int_in(50, 549),
        endorsements: entropy.int_in(5, 104),
    })
}

fn funding(_c: &CompanyRecord, entropy: &dyn EntropySource) -> Enrichment {
    Enrichment::Funding(FundingEnrichment {
        total_raised: pick(entropy, &["$500K", "$1M", "$5M"]),
        rounds: owned(&["Seed", "Series A"]),
        investors: owned(&["Y Combinator", "Sequoia"]),
    })
}

fn team(_c: &CompanyRecord, entropy: &dyn EntropySource) -> Enrichment {
    Enrichment::Team(TeamEnrichment {
        founders: owned(&["Alex Smith", "Sarah Johnson"]),
        team_size: entropy.int_in(5, 54),
        locations: owned(&["San Francisco, CA"]),
    })
}

fn metrics(_c: &CompanyRecord, entropy: &dyn EntropySource) -> Enrichment {
    Enrichment::Metrics(MetricsEnrichment {
        revenue: pick(entropy, &["$100K", "$500K", "$1M"]),
        users: pick(entropy, &["1K", "10K", "100K"]),
        growth_rate: entropy.int_in(20, 219),
    })
}
