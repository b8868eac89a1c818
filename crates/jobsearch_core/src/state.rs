use crate::view_model::{self, AppViewModel};
use crate::{CopyAck, DetailDisclosure, ResultSet, SearchHits};

/// Identifies one emitted search so late responses can be told apart.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search performed yet.
    #[default]
    Idle,
    /// A search is in flight; results from the previous one stay visible.
    Loading,
    /// The latest search succeeded, possibly with no hits.
    Loaded,
    /// The latest search failed.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    phase: SearchPhase,
    results: ResultSet,
    detail: DetailDisclosure,
    copied: Option<CopyAck>,
    last_request_id: RequestId,
    next_copy_token: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn detail(&self) -> &DetailDisclosure {
        &self.detail
    }

    pub fn copied(&self) -> Option<&CopyAck> {
        self.copied.as_ref()
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    /// Moves to `Loading` and returns the id for the new request.
    pub(crate) fn begin_search(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.phase = SearchPhase::Loading;
        self.mark_dirty();
        self.last_request_id
    }

    pub(crate) fn is_latest_request(&self, request_id: RequestId) -> bool {
        request_id == self.last_request_id && self.phase == SearchPhase::Loading
    }

    pub(crate) fn apply_search_success(&mut self, hits: SearchHits) {
        self.results.replace(hits.items, hits.total_count);
        self.phase = SearchPhase::Loaded;
        self.mark_dirty();
    }

    pub(crate) fn apply_search_failure(&mut self, message: String) {
        self.results.clear();
        self.phase = SearchPhase::Failed { message };
        self.mark_dirty();
    }

    pub(crate) fn results_mut(&mut self) -> &mut ResultSet {
        self.mark_dirty();
        &mut self.results
    }

    pub(crate) fn detail_mut(&mut self) -> &mut DetailDisclosure {
        self.mark_dirty();
        &mut self.detail
    }

    /// Records a successful copy, replacing any earlier acknowledgment.
    pub(crate) fn acknowledge_copy(&mut self, email: String) -> u64 {
        self.next_copy_token += 1;
        let token = self.next_copy_token;
        self.copied = Some(CopyAck { email, token });
        self.mark_dirty();
        token
    }

    pub(crate) fn expire_copy(&mut self, token: u64) {
        if self.copied.as_ref().is_some_and(|ack| ack.token == token) {
            self.copied = None;
            self.mark_dirty();
        }
    }
}
