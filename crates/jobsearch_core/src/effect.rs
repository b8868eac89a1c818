use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one gateway search; the outcome comes back as `Msg::SearchCompleted`.
    Search {
        request_id: crate::RequestId,
        query: String,
    },
    /// Write the email to the system clipboard and report `Msg::CopyFinished`.
    CopyToClipboard { email: String },
    /// Send `Msg::CopyAckExpired { token }` once `after` has elapsed.
    ScheduleCopyAckExpiry { token: u64, after: Duration },
}
