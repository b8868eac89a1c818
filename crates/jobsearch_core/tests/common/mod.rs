#![allow(dead_code)]

use std::sync::Once;

use jobsearch_core::{update, AppState, Effect, JobRecord, Msg, RequestId, SearchHits};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(search_logging::initialize_for_tests);
}

pub fn record(id: &str, date: Option<&str>) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        headline: format!("Job {id}"),
        publication_date: date.map(ToOwned::to_owned),
        ..JobRecord::default()
    }
}

/// `count` records whose dates descend with the index, so default order is id order.
pub fn numbered_records(count: usize) -> Vec<JobRecord> {
    (0..count)
        .map(|i| {
            let day = 28 - (i % 28);
            let month = 12 - (i / 28) % 12;
            record(&format!("job-{i:03}"), Some(&format!("2024-{month:02}-{day:02}T08:00:00")))
        })
        .collect()
}

pub fn submit(state: AppState, query: &str) -> (AppState, RequestId) {
    let (state, _) = update(state, Msg::InputChanged(query.to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let request_id = match effects.as_slice() {
        [Effect::Search { request_id, .. }] => *request_id,
        other => panic!("expected a single search effect, got {other:?}"),
    };
    (state, request_id)
}

pub fn complete(state: AppState, request_id: RequestId, items: Vec<JobRecord>, total: u64) -> AppState {
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: Ok(SearchHits {
                items,
                total_count: total,
            }),
        },
    );
    assert!(effects.is_empty());
    state
}

pub fn loaded(items: Vec<JobRecord>, total: u64) -> AppState {
    let (state, request_id) = submit(AppState::new(), "developer");
    complete(state, request_id, items, total)
}

pub fn visible_ids(state: &AppState) -> Vec<String> {
    state.view().rows.into_iter().map(|row| row.job_id).collect()
}
