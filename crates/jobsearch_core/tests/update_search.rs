mod common;

use common::{complete, init_logging, loaded, numbered_records, record, submit, visible_ids};
use jobsearch_core::{
    update, AppState, Effect, Msg, SearchPhase, Sort, SortDirection, SortKey, DEFAULT_SORT,
};

#[test]
fn submit_emits_search_with_current_input() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("Volvo".to_string()));
    let (mut state, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(
        effects,
        vec![Effect::Search {
            request_id: 1,
            query: "Volvo".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, SearchPhase::Loading);
    assert!(view.loading);
    assert!(state.consume_dirty());
}

#[test]
fn empty_query_still_searches_and_loads() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchSubmitted);
    assert_eq!(
        effects,
        vec![Effect::Search {
            request_id: 1,
            query: String::new(),
        }]
    );

    let state = complete(state, 1, numbered_records(15), 15);
    let view = state.view();
    assert_eq!(view.phase, SearchPhase::Loaded);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.pagination.map(|p| p.current_page), Some(1));
}

#[test]
fn successful_search_resets_page_and_applies_default_sort() {
    init_logging();
    let state = loaded(numbered_records(30), 30);
    let (state, _) = update(state, Msg::PageChanged(3));
    let (state, _) = update(state, Msg::SortToggled(SortKey::PublicationDate));
    assert_eq!(state.results().current_page(), 3);

    let (state, request_id) = submit(state, "Göteborg");
    let state = complete(state, request_id, numbered_records(12), 12);

    assert_eq!(state.results().current_page(), 1);
    assert_eq!(state.results().sort(), Some(DEFAULT_SORT));
    assert_eq!(state.view().pagination.map(|p| p.total_pages), Some(2));
}

#[test]
fn items_survive_while_next_search_is_loading() {
    init_logging();
    let state = loaded(numbered_records(3), 3);
    let (state, _request_id) = submit(state, "next");

    assert_eq!(state.view().phase, SearchPhase::Loading);
    assert_eq!(state.results().items().len(), 3);
}

#[test]
fn failure_clears_results_and_surfaces_message() {
    init_logging();
    let state = loaded(numbered_records(5), 5);
    let (state, request_id) = submit(state, "broken");
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: Err("http status 500".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.phase,
        SearchPhase::Failed {
            message: "http status 500".to_string()
        }
    );
    assert_eq!(view.error.as_deref(), Some("http status 500"));
    assert!(view.rows.is_empty());
    assert!(view.pagination.is_none());
    assert!(!view.show_empty_notice);
    assert_eq!(state.results().total_count(), 0);
}

#[test]
fn failed_state_recovers_on_next_search() {
    init_logging();
    let (state, request_id) = submit(AppState::new(), "x");
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id,
            result: Err("network error".to_string()),
        },
    );
    let (state, request_id) = submit(state, "y");
    let state = complete(state, request_id, numbered_records(2), 2);

    let view = state.view();
    assert_eq!(view.phase, SearchPhase::Loaded);
    assert!(view.error.is_none());
    assert_eq!(view.rows.len(), 2);
}

#[test]
fn empty_result_shows_notice() {
    init_logging();
    let state = loaded(Vec::new(), 0);
    let view = state.view();

    assert!(view.show_empty_notice);
    assert!(view.pagination.is_none());
    assert!(!AppState::new().view().show_empty_notice);
}

#[test]
fn stale_response_is_ignored() {
    init_logging();
    let (state, first) = submit(AppState::new(), "first");
    let (state, second) = submit(state, "second");
    assert!(second > first);

    let state = complete(state, second, vec![record("new", Some("2024-06-01"))], 1);
    let before = state.clone();
    let state = complete(state, first, vec![record("old", Some("2024-01-01"))], 1);

    assert_eq!(state, before);
    assert_eq!(visible_ids(&state), vec!["new"]);
}

#[test]
fn clear_resets_input_and_searches_empty() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::InputChanged("Volvo".to_string()));
    let (state, effects) = update(state, Msg::SearchCleared);

    assert_eq!(state.query(), "");
    assert_eq!(
        effects,
        vec![Effect::Search {
            request_id: 1,
            query: String::new(),
        }]
    );
}

#[test]
fn initial_state_is_idle_and_unsorted() {
    let view = AppState::new().view();
    assert_eq!(view.phase, SearchPhase::Idle);
    assert!(!view.loading);
    assert!(view.rows.is_empty());
    assert_eq!(view.sort, None);
    assert_eq!(
        loaded(Vec::new(), 0).view().sort,
        Some(Sort {
            key: SortKey::PublicationDate,
            direction: SortDirection::Descending,
        })
    );
}
