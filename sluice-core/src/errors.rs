use thiserror::Error;

pub type Result<T> = std::result::Result<T, DfsError>;

#[derive(Debug, Error)]
pub enum DfsError {
    /// The path does not exist. Returned by `file_status` for absent files;
    /// callers treat this as the signal to create the file, not as a failure.
    #[error("path not found: {0}")]
    NotFound(String),

    /// The contacted namenode is not the active coordinator. Operations that
    /// hit a standby node are rejected with this error and may be retried
    /// against another configured host.
    #[error("namenode {0} is in standby state")]
    Standby(String),

    #[error("permission denied on {path}: {reason}")]
    PermissionDenied { path: String, reason: String },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("remote error: {0}")]
    Remote(String),
}

impl DfsError {
    /// True when the error indicates the contacted host is not the active
    /// coordinator and the operation could succeed elsewhere.
    pub fn is_standby(&self) -> bool {
        matches!(self, DfsError::Standby(_))
    }
}
