use std::time::Duration;

/// How long a successful copy stays acknowledged.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(2000);

/// The single "last copied" slot. The token ties an expiry timer to the copy
/// that scheduled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyAck {
    pub email: String,
    pub token: u64,
}
