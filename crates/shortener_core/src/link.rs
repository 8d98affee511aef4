use std::fmt;

/// One shortened URL entry as held by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    /// Delete key. Empty when the server did not report one.
    pub short_code: String,
}

/// Why a gateway operation did not succeed, as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    NetworkFailure,
    ServerRejected(u16),
    MalformedResponse,
    ValidationFailure,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::NetworkFailure => write!(f, "network failure"),
            FailureKind::ServerRejected(status) => write!(f, "server rejected with status {status}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::ValidationFailure => write!(f, "validation failure"),
        }
    }
}
