use sluice_core::DfsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SinkError>;

#[derive(Debug, Error)]
pub enum SinkError {
    /// The active namenode rejected an operation and at least one alternate
    /// host is configured. Absorbed by the batch writer, which rotates to the
    /// next host and re-runs the whole batch; never surfaced to callers.
    #[error("active namenode changed, batch must be retried against another host")]
    Recoverable,

    #[error("failed to create file {path}: {source}")]
    CreateFailed {
        path: String,
        #[source]
        source: DfsError,
    },

    /// An append failed; `pending` holds the chunks that were not delivered,
    /// starting with the one that failed.
    #[error("failed to append to file {path} ({} chunks undelivered): {source}", .pending.len())]
    AppendFailed {
        path: String,
        #[source]
        source: DfsError,
        pending: Vec<Vec<u8>>,
    },

    /// Every configured namenode host was tried once for this batch and all
    /// of them rejected it as standby.
    #[error("all {0} configured namenode hosts were tried without success")]
    HostsExhausted(usize),

    #[error("no namenode host configured")]
    NoHosts,

    /// Aggregate failure surfaced to the caller when any file of the batch
    /// failed fatally. Completed files are not rolled back.
    #[error("batch write failed: {source}")]
    BatchFailed {
        #[source]
        source: Box<SinkError>,
    },

    #[error("connection error: {0}")]
    Connection(#[from] DfsError),

    #[error("internal error: {0}")]
    Internal(String),
}
