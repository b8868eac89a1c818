//! JSON shapes of the JobTech search API. Unknown fields are ignored.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<JobHit>,
    pub total: TotalCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TotalCount {
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobHit {
    pub id: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub employer: Option<Employer>,
    #[serde(default)]
    pub application_details: Option<ApplicationDetails>,
    #[serde(default)]
    pub workplace_address: Option<WorkplaceAddress>,
    #[serde(default)]
    pub application_contacts: Option<Vec<ApplicationContact>>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub description: Option<Description>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Employer {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ApplicationDetails {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WorkplaceAddress {
    #[serde(default)]
    pub municipality: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ApplicationContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub text_formatted: Option<String>,
}

impl JobHit {
    pub fn employer_name(&self) -> Option<&str> {
        self.employer.as_ref().and_then(|e| e.name.as_deref())
    }

    pub fn municipality(&self) -> Option<&str> {
        self.workplace_address
            .as_ref()
            .and_then(|a| a.municipality.as_deref())
    }

    pub fn contacts(&self) -> &[ApplicationContact] {
        self.application_contacts.as_deref().unwrap_or_default()
    }

    /// Formatted description, falling back to the plain text body.
    pub fn description_html(&self) -> Option<&str> {
        let description = self.description.as_ref()?;
        description
            .text_formatted
            .as_deref()
            .or(description.text.as_deref())
    }
}
