use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("server rejected request with status {status}")]
    ServerRejected { status: u16 },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("invalid request: {0}")]
    Validation(String),
}

impl GatewayError {
    /// Transport-level failures, as opposed to answers the server gave.
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Network(_) | GatewayError::Timeout)
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout;
    }
    if err.is_decode() {
        return GatewayError::MalformedResponse(err.to_string());
    }
    GatewayError::Network(err.to_string())
}
