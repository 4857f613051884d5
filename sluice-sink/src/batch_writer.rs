use crate::config::SinkConfig;
use crate::errors::{Result, SinkError};
use crate::failover::{ClientHandle, FailoverManager};
use crate::file_writer::FileWriter;
use crate::grouper::FileGroup;

use futures::future::join_all;
use sluice_core::{Batch, ClientProvider};
use std::sync::Arc;
use tracing::{error, warn};

/// Writes batches of records to the distributed filesystem, one concurrent
/// task per destination file, rotating to an alternate namenode host when
/// the active one rejects the batch as standby.
#[derive(Debug)]
pub struct BatchWriter {
    config: SinkConfig,
    failover: FailoverManager,
}

impl BatchWriter {
    /// Returns a new `SinkBuilder` for configuring and creating a
    /// `BatchWriter` instance.
    pub fn builder(provider: Arc<dyn ClientProvider>) -> SinkBuilder {
        SinkBuilder::new(provider)
    }

    /// Write one batch; it succeeds or fails as a whole.
    ///
    /// Delivery is at-least-once: a standby rejection discards all per-file
    /// progress and re-runs the entire batch against the next host, so bytes
    /// appended before the rejection may appear twice in their file. Each
    /// known host is tried at most once per batch; when all of them reject,
    /// the batch fails with `SinkError::HostsExhausted`.
    ///
    /// Callers are expected to present one batch at a time per writer.
    pub async fn process(&self, batch: &Batch) -> Result<()> {
        let mut handle = self.failover.current_handle().await;

        // The initial attempt already covers the bound host when it is one of
        // the known hosts; an unlisted one gets the full list on top.
        let hosts = self.failover.hosts();
        let mut rotations_left = if hosts.iter().any(|h| *h == handle.host) {
            hosts.len() - 1
        } else {
            hosts.len()
        };

        loop {
            match self.write_once(&handle, batch).await {
                Ok(()) => return Ok(()),
                Err(SinkError::Recoverable) => {
                    if rotations_left == 0 {
                        let tried = self.failover.hosts().len();
                        error!(tried, "every configured namenode rejected the batch");
                        return Err(SinkError::HostsExhausted(tried));
                    }
                    rotations_left -= 1;
                    warn!(
                        host = %handle.host,
                        "active namenode has changed, reinitializing client"
                    );
                    handle = self.failover.rotate().await?;
                }
                Err(err) => {
                    error!(error = %err, "error while sending batch to the filesystem");
                    return Err(SinkError::BatchFailed {
                        source: Box::new(err),
                    });
                }
            }
        }
    }

    /// One attempt against one bound host: group, then write all files in
    /// parallel. A standby rejection from any file wins over other failures
    /// because the whole attempt is about to be discarded anyway.
    async fn write_once(&self, handle: &ClientHandle, batch: &Batch) -> Result<()> {
        let group = FileGroup::from_batch(batch);
        let writer = FileWriter::new(handle.client.clone(), self.config.can_failover());

        let mut tasks = Vec::with_capacity(group.len());
        for (path, chunks) in group.into_entries() {
            let writer = writer.clone();
            tasks.push(tokio::spawn(
                async move { writer.write(&path, &chunks).await },
            ));
        }

        let mut fatal = None;
        for joined in join_all(tasks).await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(SinkError::Recoverable)) => return Err(SinkError::Recoverable),
                Ok(Err(err)) => {
                    fatal.get_or_insert(err);
                }
                Err(join_err) => {
                    fatal.get_or_insert(SinkError::Internal(format!(
                        "file write task failed: {join_err}"
                    )));
                }
            }
        }

        match fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// A builder for configuring and creating a `BatchWriter` instance.
pub struct SinkBuilder {
    provider: Arc<dyn ClientProvider>,
    config: SinkConfig,
    namenode_host: Option<String>,
}

impl SinkBuilder {
    pub fn new(provider: Arc<dyn ClientProvider>) -> Self {
        SinkBuilder {
            provider,
            config: SinkConfig::default(),
            namenode_host: None,
        }
    }

    /// Sets the operator configuration for the sink.
    pub fn with_config(mut self, config: SinkConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the host the initial connection binds to. Without it the first
    /// entry of `namenode_list` is used.
    pub fn with_namenode_host(mut self, host: impl Into<String>) -> Self {
        self.namenode_host = Some(host.into());
        self
    }

    /// Establish the initial connection and construct the writer.
    pub async fn build(self) -> Result<BatchWriter> {
        let initial_host = match self.namenode_host {
            Some(host) => host,
            None => self
                .config
                .namenode_list
                .first()
                .cloned()
                .ok_or(SinkError::NoHosts)?,
        };

        let failover = FailoverManager::bind(
            self.provider,
            self.config.connection.clone(),
            self.config.user.clone(),
            self.config.namenode_list.clone(),
            initial_host,
        )
        .await?;

        Ok(BatchWriter {
            config: self.config,
            failover,
        })
    }
}
