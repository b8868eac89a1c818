use crate::{AppState, Effect, Msg, COPY_ACK_DURATION};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SearchSubmitted => vec![start_search(&mut state)],
        Msg::SearchCleared => {
            state.set_query(String::new());
            vec![start_search(&mut state)]
        }
        Msg::SearchCompleted { request_id, result } => {
            // Only the most recently submitted search may touch the results.
            if !state.is_latest_request(request_id) {
                return (state, Vec::new());
            }
            match result {
                Ok(hits) => state.apply_search_success(hits),
                Err(message) => state.apply_search_failure(message),
            }
            Vec::new()
        }
        Msg::SortToggled(key) => {
            state.results_mut().set_sort(key);
            Vec::new()
        }
        Msg::PageChanged(page) => {
            state.results_mut().set_page(page);
            Vec::new()
        }
        Msg::DetailOpened { job_id } => {
            state.detail_mut().open(job_id);
            Vec::new()
        }
        Msg::DetailClosed => {
            if state.detail().is_open() {
                state.detail_mut().close();
            }
            Vec::new()
        }
        Msg::CopyRequested { email } => vec![Effect::CopyToClipboard { email }],
        Msg::CopyFinished { email, result } => match result {
            Ok(()) => {
                let token = state.acknowledge_copy(email);
                vec![Effect::ScheduleCopyAckExpiry {
                    token,
                    after: COPY_ACK_DURATION,
                }]
            }
            // Failures are reported by whoever ran the clipboard effect.
            Err(_) => Vec::new(),
        },
        Msg::CopyAckExpired { token } => {
            state.expire_copy(token);
            Vec::new()
        }
    };

    (state, effects)
}

fn start_search(state: &mut AppState) -> Effect {
    let request_id = state.begin_search();
    Effect::Search {
        request_id,
        query: state.query().to_string(),
    }
}
