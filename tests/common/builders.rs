//! Test builders for records and datasets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fake::faker::address::en::CityName;
use fake::faker::company::en::{CatchPhrase, CompanyName, Industry};
use fake::faker::job::en::Title;
use fake::faker::name::en::Name;
use fake::Fake;
use websets::{CompanyRecord, EngineerRecord, StaticDataset};

// ---------------------------------------------------------------------------
// EngineerBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`EngineerRecord`] fixtures. Optional fields start empty.
///
/// # Example
///
/// ```rust
/// let ada = EngineerBuilder::new(1, "Ada Lovelace")
///     .company("Analytical Engines")
///     .skills("Rust, Math")
///     .build();
/// ```
pub struct EngineerBuilder {
    record: EngineerRecord,
}

impl EngineerBuilder {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            record: EngineerRecord {
                id,
                name: name.into(),
                position: None,
                company: None,
                linkedin_url: None,
                github_url: None,
                graduation_date: None,
                seniority: None,
                location: None,
                skills: None,
            },
        }
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.record.position = Some(position.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.record.company = Some(company.into());
        self
    }

    pub fn skills(mut self, skills: impl Into<String>) -> Self {
        self.record.skills = Some(skills.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.record.location = Some(location.into());
        self
    }

    pub fn github(mut self, url: impl Into<String>) -> Self {
        self.record.github_url = Some(url.into());
        self
    }

    pub fn linkedin(mut self, url: impl Into<String>) -> Self {
        self.record.linkedin_url = Some(url.into());
        self
    }

    pub fn build(self) -> EngineerRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// CompanyBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`CompanyRecord`] fixtures.
pub struct CompanyBuilder {
    record: CompanyRecord,
}

impl CompanyBuilder {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            record: CompanyRecord {
                id,
                name: name.into(),
                description: None,
                url: None,
                batch: None,
                status: None,
                industries: None,
            },
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = Some(description.into());
        self
    }

    pub fn industries(mut self, industries: impl Into<String>) -> Self {
        self.record.industries = Some(industries.into());
        self
    }

    pub fn batch(mut self, batch: impl Into<String>) -> Self {
        self.record.batch = Some(batch.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.record.status = Some(status.into());
        self
    }

    pub fn build(self) -> CompanyRecord {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Random records
// ---------------------------------------------------------------------------

/// An engineer with every field populated from `fake`.
pub fn fake_engineer(id: u64) -> EngineerRecord {
    let name: String = Name().fake();
    let handle: String = name.to_lowercase().split_whitespace().collect();
    EngineerRecord {
        id,
        position: Some(Title().fake()),
        company: Some(CompanyName().fake()),
        linkedin_url: Some(format!("https://linkedin.com/in/{handle}")),
        github_url: Some(format!("https://github.com/{handle}")),
        graduation_date: Some((1990..2025u16).fake()),
        seniority: Some("Mid-Level".to_string()),
        location: Some(CityName().fake()),
        skills: Some(format!("{}, {}", Industry().fake::<String>(), Industry().fake::<String>())),
        name,
    }
}

/// A company with every field populated from `fake`.
pub fn fake_company(id: u64) -> CompanyRecord {
    let name: String = CompanyName().fake();
    CompanyRecord {
        id,
        description: Some(CatchPhrase().fake()),
        url: Some(format!("https://{}.example", name.to_lowercase().replace(' ', "-"))),
        batch: Some("S24".to_string()),
        status: Some("Active".to_string()),
        industries: Some(Industry().fake()),
        name,
    }
}

/// A dataset of `n` fake engineers and `n` fake companies, ids `1..=n`.
pub fn random_dataset(n: u64) -> StaticDataset {
    StaticDataset::new(
        (1..=n).map(fake_engineer).collect(),
        (1..=n).map(fake_company).collect(),
    )
}
