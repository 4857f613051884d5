use crate::errors::Result;

use async_trait::async_trait;
use std::sync::Arc;

/// Metadata for a file or directory on the distributed filesystem.
#[derive(Debug, Clone)]
pub struct FileStatus {
    pub path: String,
    pub length: u64,
    pub is_dir: bool,
}

/// Client primitives of the namenode-coordinated filesystem.
///
/// All operations go through the currently bound namenode host. When that
/// host is not the active coordinator they fail with `DfsError::Standby`,
/// which callers may translate into a failover.
#[async_trait]
pub trait DfsClient: Send + Sync {
    /// Fetch the status of a path. Absent paths yield `DfsError::NotFound`.
    async fn file_status(&self, path: &str) -> Result<FileStatus>;

    /// Recursively create a directory and any missing parents.
    async fn mkdirs(&self, path: &str) -> Result<()>;

    /// Create a new file with the given initial content.
    async fn create(&self, path: &str, initial: &[u8]) -> Result<()>;

    /// Append bytes to an existing file.
    ///
    /// The primitive is not safe for concurrent callers on the same file and
    /// provides no ordering by itself; callers must serialize appends per file.
    async fn append(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Source of connections bound to a specific namenode host.
///
/// Implementations must return a fresh, uncached client on every call: a
/// host rebind after failover requires a new connection, so connection
/// caching is explicitly not permitted for sink clients.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn connect(&self, endpoint: &str, user: &str, host: &str) -> Result<Arc<dyn DfsClient>>;
}
