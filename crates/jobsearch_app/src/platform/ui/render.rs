use std::fmt::Write;

use jobsearch_core::{
    AppViewModel, ApplicationCell, JobRowView, SortDirection, TextKey, Translations,
};
use jobsearch_engine::{DescriptionRenderer, MarkdownDescriptionRenderer};

const RULE: &str = "------------------------------------------------------------";

pub fn render(view: &AppViewModel, t: &Translations) -> String {
    render_with(view, t, &MarkdownDescriptionRenderer)
}

pub fn render_with(
    view: &AppViewModel,
    t: &Translations,
    descriptions: &dyn DescriptionRenderer,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", t.text(TextKey::Title));
    let _ = writeln!(out, "{RULE}");
    if view.query.is_empty() {
        let _ = writeln!(out, "[{}]", t.text(TextKey::SearchPrompt));
    } else {
        let _ = writeln!(out, "> {}", view.query);
    }

    if view.loading {
        let _ = writeln!(out, "{}", t.text(TextKey::Loading));
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "{}: {}", t.text(TextKey::ErrorPrefix), error);
    }
    if view.show_empty_notice {
        let _ = writeln!(out, "{}", t.text(TextKey::NoJobsFound));
    }

    if !view.rows.is_empty() {
        let indicator = match view.sort.map(|sort| sort.direction) {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => "",
        };
        let _ = writeln!(
            out,
            "{}: {}{}",
            t.text(TextKey::SortBy),
            t.text(TextKey::PublicationDate),
            indicator
        );
        for (index, row) in view.rows.iter().enumerate() {
            let _ = writeln!(out);
            render_row(&mut out, index + 1, row, t);
        }
    }

    if let Some(pages) = &view.pagination {
        let _ = writeln!(out);
        let previous = if pages.has_previous {
            format!("< {} (:prev)", t.text(TextKey::Previous))
        } else {
            String::new()
        };
        let next = if pages.has_next {
            format!("{} (:next) >", t.text(TextKey::Next))
        } else {
            String::new()
        };
        let summary = t.page_summary(pages.current_page, pages.total_pages, pages.total_count);
        let line = format!("{previous} {summary} {next}");
        let _ = writeln!(out, "{}", line.trim());
    }

    if let Some(detail) = &view.detail {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{}", detail.headline);
        let _ = writeln!(out);
        if let Some(html) = &detail.description_html {
            let _ = writeln!(out, "{}", descriptions.render(html));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "[:close] {}", t.text(TextKey::Close));
        let _ = writeln!(out, "{RULE}");
    }

    out
}

fn render_row(out: &mut String, number: usize, row: &JobRowView, t: &Translations) {
    let na = t.text(TextKey::NotAvailable);
    let _ = writeln!(out, "{number:>2}. {}", row.headline);
    let _ = writeln!(
        out,
        "    {}: {}",
        t.text(TextKey::Employer),
        row.employer.as_deref().unwrap_or(na)
    );

    let application = match &row.application {
        ApplicationCell::Link { url } | ApplicationCell::OtherLink { url } => {
            format!("{} {url}", t.text(TextKey::Apply))
        }
        ApplicationCell::Email { email, copied } => {
            format!("{email} {}", copy_hint(*copied, &format!(":copy {number}"), t))
        }
        ApplicationCell::NotAvailable => na.to_string(),
    };
    let _ = writeln!(out, "    {}: {}", t.text(TextKey::Application), application);
    let _ = writeln!(
        out,
        "    {}: {}",
        t.text(TextKey::Location),
        row.location.as_deref().unwrap_or(na)
    );
    let _ = writeln!(
        out,
        "    {}: {}",
        t.text(TextKey::Contacts),
        row.contact_summary.as_deref().unwrap_or(na)
    );
    for (index, contact) in row.contact_emails.iter().enumerate() {
        let command = format!(":copy {number} {}", index + 1);
        let _ = writeln!(
            out,
            "      {} {}",
            contact.email,
            copy_hint(contact.copied, &command, t)
        );
    }
    let _ = writeln!(
        out,
        "    {}: {}",
        t.text(TextKey::Published),
        row.published.as_deref().unwrap_or(na)
    );
}

fn copy_hint(copied: bool, command: &str, t: &Translations) -> String {
    if copied {
        format!("({})", t.text(TextKey::Copied))
    } else {
        format!("[{command}] {}", t.text(TextKey::CopyEmail))
    }
}
