use crate::errors::{Result, SinkError};

use sluice_core::{DfsClient, DfsError};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Writes the ordered chunks of one destination file: makes sure the file
/// exists, then appends the chunks strictly one after another, since the
/// append primitive is not safe for concurrent callers on the same file.
#[derive(Clone)]
pub(crate) struct FileWriter {
    client: Arc<dyn DfsClient>,
    can_failover: bool,
}

impl FileWriter {
    pub(crate) fn new(client: Arc<dyn DfsClient>, can_failover: bool) -> Self {
        FileWriter {
            client,
            can_failover,
        }
    }

    /// Append every non-empty chunk to `path`, in order, creating the file
    /// first if needed.
    ///
    /// A standby rejection becomes `SinkError::Recoverable` when an alternate
    /// host is configured; any other failure is terminal for the batch.
    pub(crate) async fn write(&self, path: &str, chunks: &[Vec<u8>]) -> Result<()> {
        self.ensure_exists(path).await?;

        for (at, chunk) in chunks.iter().enumerate() {
            if chunk.is_empty() {
                continue;
            }
            if let Err(err) = self.client.append(path, chunk).await {
                if err.is_standby() && self.can_failover {
                    return Err(SinkError::Recoverable);
                }
                return Err(SinkError::AppendFailed {
                    path: path.to_string(),
                    source: err,
                    pending: chunks[at..].to_vec(),
                });
            }
        }
        Ok(())
    }

    /// The file must exist before anything can be appended to it. A failed
    /// status check enters the creation path; the creation outcome decides
    /// whether the miss was benign.
    async fn ensure_exists(&self, path: &str) -> Result<()> {
        if self.client.file_status(path).await.is_ok() {
            return Ok(());
        }

        debug!(path, "destination file does not exist, creating it");
        if let Err(err) = self.create_with_parents(path).await {
            if err.is_standby() && self.can_failover {
                return Err(SinkError::Recoverable);
            }
            return Err(SinkError::CreateFailed {
                path: path.to_string(),
                source: err,
            });
        }
        Ok(())
    }

    async fn create_with_parents(&self, path: &str) -> std::result::Result<(), DfsError> {
        self.client.mkdirs(&parent_dir(path)).await?;
        self.client.create(path, &[]).await
    }
}

/// Parent directory of a file path; the root is its own parent.
fn parent_dir(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().into_owned()
        }
        _ => "/".to_string(),
    }
}
