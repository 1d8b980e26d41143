use thiserror::Error;

/// Failures raised by the browser surface. None of these reach the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("click listener rejected: {0}")]
    ListenerRejected(String),
}
