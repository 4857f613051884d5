use crate::client::{ClientProvider, DfsClient, FileStatus};
use crate::errors::{DfsError, Result};

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// One recorded filesystem call, tagged with the host that served it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Connect { host: String },
    FileStatus { host: String, path: String },
    Mkdirs { host: String, path: String },
    Create { host: String, path: String },
    Append { host: String, path: String, data: Vec<u8> },
}

#[derive(Debug, Default)]
struct ClusterState {
    active: Mutex<String>,
    files: Mutex<HashMap<String, Vec<u8>>>,
    dirs: Mutex<HashSet<String>>,
    ops: Mutex<Vec<Operation>>,
}

/// In-memory model of a namenode-coordinated filesystem.
/// SHOULD BE USED ONLY FOR TESTING PURPOSES
///
/// All hosts share one namespace, but only the designated active host serves
/// requests; clients bound to any other host are answered with
/// `DfsError::Standby`, which is how a real cluster signals that the
/// contacted namenode is in standby state. Every call is recorded so tests
/// can assert ordering and host binding.
#[derive(Debug, Clone, Default)]
pub struct MemoryCluster {
    inner: Arc<ClusterState>,
}

impl MemoryCluster {
    pub fn new(active_host: impl Into<String>) -> Self {
        let cluster = MemoryCluster::default();
        *cluster.inner.active.lock().unwrap() = active_host.into();
        cluster
    }

    /// Promote another host to active; all other hosts become standby.
    pub fn set_active(&self, host: impl Into<String>) {
        *self.inner.active.lock().unwrap() = host.into();
    }

    /// A client bound to the given host, sharing this cluster's namespace.
    pub fn client_for(&self, host: impl Into<String>) -> MemoryDfs {
        MemoryDfs {
            host: host.into(),
            cluster: self.inner.clone(),
        }
    }

    /// Current content of a file, if it exists.
    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.inner.files.lock().unwrap().get(path).cloned()
    }

    pub fn dir_exists(&self, path: &str) -> bool {
        self.inner.dirs.lock().unwrap().contains(path)
    }

    /// Every operation served (or rejected) so far, in call order.
    pub fn operations(&self) -> Vec<Operation> {
        self.inner.ops.lock().unwrap().clone()
    }
}

/// A client view of a [`MemoryCluster`], bound to one host.
#[derive(Debug, Clone)]
pub struct MemoryDfs {
    host: String,
    cluster: Arc<ClusterState>,
}

impl MemoryDfs {
    fn record(&self, op: Operation) {
        self.cluster.ops.lock().unwrap().push(op);
    }

    fn check_active(&self) -> Result<()> {
        let active = self.cluster.active.lock().unwrap();
        if *active == self.host {
            Ok(())
        } else {
            Err(DfsError::Standby(self.host.clone()))
        }
    }
}

#[async_trait]
impl DfsClient for MemoryDfs {
    async fn file_status(&self, path: &str) -> Result<FileStatus> {
        self.record(Operation::FileStatus {
            host: self.host.clone(),
            path: path.to_string(),
        });
        self.check_active()?;

        if let Some(content) = self.cluster.files.lock().unwrap().get(path) {
            return Ok(FileStatus {
                path: path.to_string(),
                length: content.len() as u64,
                is_dir: false,
            });
        }
        if self.cluster.dirs.lock().unwrap().contains(path) {
            return Ok(FileStatus {
                path: path.to_string(),
                length: 0,
                is_dir: true,
            });
        }
        Err(DfsError::NotFound(path.to_string()))
    }

    async fn mkdirs(&self, path: &str) -> Result<()> {
        self.record(Operation::Mkdirs {
            host: self.host.clone(),
            path: path.to_string(),
        });
        self.check_active()?;

        // Create the directory and all missing ancestors
        let mut dirs = self.cluster.dirs.lock().unwrap();
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current.push('/');
            current.push_str(segment);
            dirs.insert(current.clone());
        }
        dirs.insert("/".to_string());
        Ok(())
    }

    async fn create(&self, path: &str, initial: &[u8]) -> Result<()> {
        self.record(Operation::Create {
            host: self.host.clone(),
            path: path.to_string(),
        });
        self.check_active()?;

        let mut files = self.cluster.files.lock().unwrap();
        if files.contains_key(path) {
            return Err(DfsError::Remote(format!("file already exists: {}", path)));
        }
        files.insert(path.to_string(), initial.to_vec());
        Ok(())
    }

    async fn append(&self, path: &str, data: &[u8]) -> Result<()> {
        self.record(Operation::Append {
            host: self.host.clone(),
            path: path.to_string(),
            data: data.to_vec(),
        });
        self.check_active()?;

        let mut files = self.cluster.files.lock().unwrap();
        match files.get_mut(path) {
            Some(content) => {
                content.extend_from_slice(data);
                Ok(())
            }
            None => Err(DfsError::Remote(format!(
                "cannot append to non-existent file: {}",
                path
            ))),
        }
    }
}

/// Provider returning fresh clients bound to hosts of one [`MemoryCluster`].
#[derive(Debug, Clone)]
pub struct MemoryProvider {
    cluster: MemoryCluster,
}

impl MemoryProvider {
    pub fn new(cluster: MemoryCluster) -> Self {
        Self { cluster }
    }
}

#[async_trait]
impl ClientProvider for MemoryProvider {
    async fn connect(&self, _endpoint: &str, _user: &str, host: &str) -> Result<Arc<dyn DfsClient>> {
        self.cluster.inner.ops.lock().unwrap().push(Operation::Connect {
            host: host.to_string(),
        });
        Ok(Arc::new(self.cluster.client_for(host)))
    }
}
