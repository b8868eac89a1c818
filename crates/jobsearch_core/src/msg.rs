use crate::{JobId, RequestId, SearchHits, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input.
    InputChanged(String),
    /// User submitted the current input. Empty queries are searched too.
    SearchSubmitted,
    /// User cleared the input; this also runs an empty search.
    SearchCleared,
    /// Gateway outcome for a previously emitted search effect.
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchHits, String>,
    },
    /// User toggled the sort on a column.
    SortToggled(SortKey),
    /// User navigated to a 1-based page.
    PageChanged(u32),
    /// User opened the detail view for a record.
    DetailOpened { job_id: JobId },
    /// User closed the detail view.
    DetailClosed,
    /// User asked to copy an email address.
    CopyRequested { email: String },
    /// Clipboard outcome for a copy request.
    CopyFinished {
        email: String,
        result: Result<(), String>,
    },
    /// The acknowledgment timer scheduled with `token` fired.
    CopyAckExpired { token: u64 },
}
