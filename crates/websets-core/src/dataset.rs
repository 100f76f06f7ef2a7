//! Dataset store. Holds the read-only record sequences the query layer reads from.
//!
//! The store is populated once and never mutated; handlers share it behind an
//! `Arc<dyn DataProvider>`. [`SampleDataset`] holds the built-in demo records,
//! [`StaticDataset`] wraps arbitrary records (tests use it for fixtures).

use crate::types::{CompanyRecord, EngineerRecord, Record, RecordKind};

/// Read-only access to the records of each kind, in dataset order.
pub trait DataProvider: Send + Sync {
    fn list(&self, kind: RecordKind) -> &[Record];

    /// Exact id lookup within one kind.
    fn find(&self, kind: RecordKind, id: u64) -> Option<&Record> {
        self.list(kind).iter().find(|r| r.id() == id)
    }
}

/// A fixed set of engineers and companies.
#[derive(Debug, Clone, Default)]
pub struct StaticDataset {
    engineers: Vec<Record>,
    companies: Vec<Record>,
}

impl StaticDataset {
    pub fn new(engineers: Vec<EngineerRecord>, companies: Vec<CompanyRecord>) -> Self {
        Self {
            engineers: engineers.into_iter().map(Record::from).collect(),
            companies: companies.into_iter().map(Record::from).collect(),
        }
    }
}

impl DataProvider for StaticDataset {
    fn list(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Engineer => &self.engineers,
            RecordKind::Company => &self.companies,
        }
    }
}

/// The built-in demo records served by a fresh process.
#[derive(Debug, Clone)]
pub struct SampleDataset(StaticDataset);

impl SampleDataset {
    pub fn new() -> Self {
        Self(StaticDataset::new(sample_engineers(), sample_companies()))
    }
}

impl Default for SampleDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for SampleDataset {
    fn list(&self, kind: RecordKind) -> &[Record] {
        self.0.list(kind)
    }
}

// ---------------------------------------------------------------------------
// Sample literals
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn engineer(
    id: u64,
    name: &str,
    position: &str,
    company: &str,
    linkedin_url: &str,
    github_url: &str,
    graduation_date: u16,
    seniority: &str,
    skills: &str,
) -> EngineerRecord {
    EngineerRecord {
        id,
        name: name.to_string(),
        position: Some(position.to_string()),
        company: Some(company.to_string()),
        linkedin_url: Some(linkedin_url.to_string()),
        github_url: Some(github_url.to_string()),
        graduation_date: Some(graduation_date),
        seniority: Some(seniority.to_string()),
        location: Some("San Francisco, CA".to_string()),
        skills: Some(skills.to_string()),
    }
}

fn company(
    id: u64,
    name: &str,
    description: &str,
    url: &str,
    status: &str,
    industries: &str,
) -> CompanyRecord {
    CompanyRecord {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        url: Some(url.to_string()),
        batch: Some("W23".to_string()),
        status: Some(status.to_string()),
        industries: Some(industries.to_string()),
    }
}

pub fn sample_engineers() -> Vec<EngineerRecord> {
    vec![
        engineer(
            1,
            "Michael Zhang",
            "Senior Full-Stack Engineer",
            "Anthropic",
            "https://www.linkedin.com/in/william-bryk",
            "https://github.com/exa-labs/exa-mcp-server",
            2016,
            "Lead, Senior",
            "React, Node.js, Python, AI/ML",
        ),
        engineer(
            2,
            "Sarah Johnson",
            "Frontend Engineer",
            "Scale AI",
            "https://linkedin.com/in/wangzjeff/",
            "https://github.com/exa-labs/company-researcher",
            2018,
            "Mid-Level",
            "React, TypeScript, UI/UX Design",
        ),
        engineer(
            3,
            "Thomas Park",
            "Full-Stack Engineer",
            "Cohere",
            "https://www.linkedin.com/in/william-bryk",
            "https://github.com/exa-labs/exa-js",
            2015,
            "Mid-Level",
            "JavaScript, Python, Machine Learning",
        ),
        engineer(
            4,
            "Elena Rodriguez",
            "Product Engineer",
            "Hugging Face",
            "https://linkedin.com/in/wangzjeff/",
            "https://github.com/exa-labs/openapi-spec",
            2023,
            "Mid-Level, Lead",
            "Python, AI, Product Design",
        ),
        engineer(
            5,
            "Alex Rivera",
            "Senior Software Engineer",
            "Adept AI",
            "https://www.linkedin.com/in/william-bryk",
            "https://github.com/exa-labs/exa-py",
            2021,
            "Senior, Lead",
            "Python, AI/ML, System Design",
        ),
    ]
}

pub fn sample_companies() -> Vec<CompanyRecord> {
    vec![
        company(
            1,
            "Hadrius",
            "Effortless Financial Compliance",
            "https://www.hadrius.com",
            "Active",
            "Fintech, Asset Management",
        ),
        company(
            2,
            "Fairway Health",
            "AI Co-Pilot for Health Insurers to Authorize Treatment Faster",
            "https://www.fairwayhealth.co/",
            "Acquired",
            "Healthcare, Healthcare IT",
        ),
        company(
            3,
            "Pointwise",
            "App that tells you which credit cards to get and when",
            "http://www.getpointwise.com",
            "Active",
            "Consumer",
        ),
        company(
            4,
            "Shortbread",
            "Read romance comics.",
            "https://www.shortbread.ai/",
            "Active",
            "Consumer, Content",
        ),
        company(
            5,
            "SPRX",
            "AI for corporate R&D tax credits",
            "https://sprx.tax",
            "Active",
            "B2B, Finance and Accounting",
        ),
    ]
}
