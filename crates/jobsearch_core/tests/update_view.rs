mod common;

use common::{init_logging, loaded, numbered_records, record, visible_ids};
use jobsearch_core::{
    update, ApplicationCell, ApplicationTarget, Contact, JobRecord, Msg, SortDirection, SortKey,
    PAGE_SIZE,
};

#[test]
fn sort_toggle_flips_and_returns() {
    init_logging();
    let state = loaded(numbered_records(3), 3);
    let original = state.results().sort().map(|s| s.direction);
    assert_eq!(original, Some(SortDirection::Descending));

    let (state, effects) = update(state, Msg::SortToggled(SortKey::PublicationDate));
    assert!(effects.is_empty());
    assert_eq!(
        state.results().sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );

    let (state, _) = update(state, Msg::SortToggled(SortKey::PublicationDate));
    assert_eq!(state.results().sort().map(|s| s.direction), original);

    let (state, _) = update(state, Msg::SortToggled(SortKey::PublicationDate));
    assert_eq!(
        state.results().sort().map(|s| s.direction),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn missing_dates_sort_as_epoch() {
    init_logging();
    let state = loaded(
        vec![
            record("jan", Some("2024-01-01")),
            record("none", None),
            record("jun", Some("2024-06-01")),
        ],
        3,
    );
    assert_eq!(visible_ids(&state), vec!["jun", "jan", "none"]);

    let (state, _) = update(state, Msg::SortToggled(SortKey::PublicationDate));
    assert_eq!(visible_ids(&state), vec!["none", "jan", "jun"]);
}

#[test]
fn sorting_keeps_page_and_never_refetches() {
    init_logging();
    let state = loaded(numbered_records(25), 25);
    let (state, _) = update(state, Msg::PageChanged(2));
    let (state, effects) = update(state, Msg::SortToggled(SortKey::PublicationDate));

    assert!(effects.is_empty());
    assert_eq!(state.results().current_page(), 2);
    // Ascending: page 2 holds the 11th..20th oldest.
    let expected: Vec<String> = (5..15).rev().map(|i| format!("job-{i:03}")).collect();
    assert_eq!(visible_ids(&state), expected);
}

#[test]
fn sort_applies_across_all_items_before_slicing() {
    init_logging();
    let mut items = numbered_records(12);
    items.reverse();
    let state = loaded(items, 12);

    let expected: Vec<String> = (0..10).map(|i| format!("job-{i:03}")).collect();
    assert_eq!(visible_ids(&state), expected);
}

#[test]
fn visible_page_length_matches_remaining_items() {
    init_logging();
    let state = loaded(numbered_records(23), 23);
    for (page, expected) in [(1, 10), (2, 10), (3, 3), (4, 0), (9, 0)] {
        let (next, _) = update(state.clone(), Msg::PageChanged(page));
        let remaining = 23usize.saturating_sub((page as usize - 1) * PAGE_SIZE);
        assert_eq!(next.view().rows.len(), expected);
        assert_eq!(next.view().rows.len(), remaining.min(PAGE_SIZE));
    }
}

#[test]
fn pagination_uses_server_total() {
    init_logging();
    let state = loaded(numbered_records(100), 2345);
    let pagination = state.view().pagination.expect("pagination");

    assert_eq!(pagination.current_page, 1);
    assert_eq!(pagination.total_pages, 235);
    assert_eq!(pagination.total_count, 2345);
    assert!(!pagination.has_previous);
    assert!(pagination.has_next);

    let (state, _) = update(state, Msg::PageChanged(235));
    let pagination = state.view().pagination.expect("pagination");
    assert!(pagination.has_previous);
    assert!(!pagination.has_next);
    assert!(state.view().rows.is_empty());
}

#[test]
fn page_changes_are_stored_unclamped() {
    init_logging();
    let state = loaded(numbered_records(5), 5);
    let (state, effects) = update(state, Msg::PageChanged(7));
    assert!(effects.is_empty());
    assert_eq!(state.results().current_page(), 7);
}

#[test]
fn row_view_formats_cells() {
    init_logging();
    let job = JobRecord {
        id: "42".to_string(),
        headline: "Frontend developer".to_string(),
        employer_name: Some("Volvo".to_string()),
        application_target: ApplicationTarget::Email("jobs@volvo.example".to_string()),
        workplace_municipality: Some("Göteborg".to_string()),
        contacts: vec![
            Contact {
                name: Some("Anna".to_string()),
                email: Some("anna@volvo.example".to_string()),
                telephone: None,
            },
            Contact {
                name: None,
                email: None,
                telephone: Some("031-123".to_string()),
            },
        ],
        publication_date: Some("2024-06-01T09:30:00".to_string()),
        description_html: None,
    };
    let state = loaded(vec![job], 1);
    let row = state.view().rows.remove(0);

    assert_eq!(row.employer.as_deref(), Some("Volvo"));
    assert_eq!(row.location.as_deref(), Some("Göteborg"));
    assert_eq!(row.published.as_deref(), Some("2024-06-01"));
    assert_eq!(
        row.contact_summary.as_deref(),
        Some("💼 Anna ✉ anna@volvo.example, 📞 031-123")
    );
    assert_eq!(
        row.application,
        ApplicationCell::Email {
            email: "jobs@volvo.example".to_string(),
            copied: false,
        }
    );
    assert_eq!(row.contact_emails.len(), 1);
}

#[test]
fn rows_without_optional_fields() {
    init_logging();
    let state = loaded(vec![record("bare", None)], 1);
    let row = state.view().rows.remove(0);

    assert_eq!(row.application, ApplicationCell::NotAvailable);
    assert_eq!(row.contact_summary, None);
    assert_eq!(row.published, None);
    assert!(row.contact_emails.is_empty());
}

#[test]
fn detail_opens_and_closes() {
    init_logging();
    let mut job = record("d1", Some("2024-02-02"));
    job.description_html = Some("<p>Caf&eacute;</p>".to_string());
    let state = loaded(vec![job, record("d2", None)], 2);

    let (state, effects) = update(
        state,
        Msg::DetailOpened {
            job_id: "d1".to_string(),
        },
    );
    assert!(effects.is_empty());
    let detail = state.view().detail.expect("detail open");
    assert_eq!(detail.headline, "Job d1");
    assert_eq!(detail.description_html.as_deref(), Some("<p>Caf&eacute;</p>"));

    let (mut state, _) = update(state, Msg::DetailClosed);
    assert!(state.consume_dirty());
    assert!(state.view().detail.is_none());
    assert_eq!(state.detail().selected(), Some("d1"));

    let (mut state, _) = update(state, Msg::DetailClosed);
    assert!(!state.consume_dirty());
}

#[test]
fn detail_disappears_when_record_is_replaced() {
    init_logging();
    let state = loaded(vec![record("gone", None)], 1);
    let (state, _) = update(
        state,
        Msg::DetailOpened {
            job_id: "gone".to_string(),
        },
    );
    assert!(state.view().detail.is_some());

    let (state, request_id) = common::submit(state, "other");
    let state = common::complete(state, request_id, vec![record("fresh", None)], 1);
    assert!(state.view().detail.is_none());
}
