/// Opaque identifier assigned by the job search API.
pub type JobId = String;

/// One job posting as returned by a search. Never mutated after a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobRecord {
    pub id: JobId,
    pub headline: String,
    pub employer_name: Option<String>,
    pub application_target: ApplicationTarget,
    pub workplace_municipality: Option<String>,
    pub contacts: Vec<Contact>,
    /// ISO-8601 timestamp as sent by the API.
    pub publication_date: Option<String>,
    pub description_html: Option<String>,
}

/// How to apply for a job. Exactly one variant applies per record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApplicationTarget {
    Url(String),
    Email(String),
    OtherUrl(String),
    #[default]
    None,
}

impl ApplicationTarget {
    /// Picks the first present field in the order url, email, other.
    /// Blank strings are treated as absent.
    pub fn from_parts(url: Option<&str>, email: Option<&str>, other: Option<&str>) -> Self {
        if let Some(url) = non_blank(url) {
            Self::Url(url.to_string())
        } else if let Some(email) = non_blank(email) {
            Self::Email(email.to_string())
        } else if let Some(other) = non_blank(other) {
            Self::OtherUrl(other.to_string())
        } else {
            Self::None
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Email(email) => Some(email),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
}

/// A successful search: the fetched records plus the server-side match count,
/// which may exceed `items.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchHits {
    pub items: Vec<JobRecord>,
    pub total_count: u64,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
