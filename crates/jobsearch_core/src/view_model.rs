use crate::{AppState, ApplicationTarget, Contact, JobId, JobRecord, SearchPhase, Sort};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: SearchPhase,
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<JobRowView>,
    pub sort: Option<Sort>,
    pub pagination: Option<PaginationView>,
    pub detail: Option<DetailView>,
    /// A search completed without hits.
    pub show_empty_notice: bool,
    pub copied_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub headline: String,
    pub employer: Option<String>,
    pub application: ApplicationCell,
    pub location: Option<String>,
    /// Contacts joined into one line, `None` when there are none.
    pub contact_summary: Option<String>,
    pub contact_emails: Vec<ContactEmailView>,
    /// `YYYY-MM-DD`, `None` when the record has no date.
    pub published: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationCell {
    Link { url: String },
    Email { email: String, copied: bool },
    OtherLink { url: String },
    NotAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmailView {
    pub email: String,
    pub copied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub job_id: JobId,
    pub headline: String,
    /// Raw description markup; entity decoding happens at render time.
    pub description_html: Option<String>,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let results = state.results();
    let copied_email = state.copied().map(|ack| ack.email.clone());
    let is_copied = |email: &str| copied_email.as_deref() == Some(email);

    let rows = results
        .visible_page()
        .into_iter()
        .map(|record| row_view(record, &is_copied))
        .collect();

    let pagination = (!results.is_empty()).then(|| {
        let current_page = results.current_page();
        let total_pages = results.total_pages();
        PaginationView {
            current_page,
            total_pages,
            total_count: results.total_count(),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    });

    let detail = state.detail().resolve(results).map(|record| DetailView {
        job_id: record.id.clone(),
        headline: record.headline.clone(),
        description_html: record.description_html.clone(),
    });

    let error = match state.phase() {
        SearchPhase::Failed { message } => Some(message.clone()),
        _ => None,
    };

    AppViewModel {
        phase: state.phase().clone(),
        query: state.query().to_string(),
        loading: *state.phase() == SearchPhase::Loading,
        show_empty_notice: *state.phase() == SearchPhase::Loaded && results.is_empty(),
        error,
        rows,
        sort: results.sort(),
        pagination,
        detail,
        copied_email,
    }
}

fn row_view(record: &JobRecord, is_copied: &dyn Fn(&str) -> bool) -> JobRowView {
    let application = match &record.application_target {
        ApplicationTarget::Url(url) => ApplicationCell::Link { url: url.clone() },
        ApplicationTarget::Email(email) => ApplicationCell::Email {
            email: email.clone(),
            copied: is_copied(email),
        },
        ApplicationTarget::OtherUrl(url) => ApplicationCell::OtherLink { url: url.clone() },
        ApplicationTarget::None => ApplicationCell::NotAvailable,
    };

    let contact_emails = record
        .contacts
        .iter()
        .filter_map(|contact| contact.email.as_deref())
        .filter(|email| !email.is_empty())
        .map(|email| ContactEmailView {
            email: email.to_string(),
            copied: is_copied(email),
        })
        .collect();

    JobRowView {
        job_id: record.id.clone(),
        headline: record.headline.clone(),
        employer: record.employer_name.clone(),
        application,
        location: record.workplace_municipality.clone(),
        contact_summary: summarize_contacts(&record.contacts),
        contact_emails,
        published: record.publication_date.as_deref().and_then(date_portion),
    }
}

/// Joins contacts as `💼 name ✉ email 📞 phone`, separated by `, `.
pub fn summarize_contacts(contacts: &[Contact]) -> Option<String> {
    if contacts.is_empty() {
        return None;
    }
    let summary = contacts
        .iter()
        .map(|contact| {
            [
                ("💼", contact.name.as_deref()),
                ("✉", contact.email.as_deref()),
                ("📞", contact.telephone.as_deref()),
            ]
            .into_iter()
            .filter_map(|(icon, value)| {
                value
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{icon} {v}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(summary)
}

/// The part of an ISO-8601 timestamp before `T`.
pub fn date_portion(timestamp: &str) -> Option<String> {
    let date = timestamp.split('T').next().unwrap_or(timestamp).trim();
    (!date.is_empty()).then(|| date.to_string())
}
