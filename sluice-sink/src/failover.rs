use crate::errors::{Result, SinkError};

use sluice_core::{ClientProvider, DfsClient};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// A connection bound to one specific namenode host for the duration of a
/// batch attempt. Replaced, never mutated, on rotation.
#[derive(Clone)]
pub struct ClientHandle {
    pub host: String,
    pub client: Arc<dyn DfsClient>,
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("host", &self.host)
            .finish()
    }
}

/// Owns the ordered namenode host list and the currently bound connection.
///
/// Rotation is a critical section: the current handle sits behind a mutex so
/// that overlapping retries cannot make the next-host selection
/// nondeterministic.
pub struct FailoverManager {
    provider: Arc<dyn ClientProvider>,
    endpoint: String,
    user: String,
    hosts: Vec<String>,
    current: Mutex<ClientHandle>,
}

impl FailoverManager {
    /// Establish the initial connection and take ownership of the host list.
    pub async fn bind(
        provider: Arc<dyn ClientProvider>,
        endpoint: impl Into<String>,
        user: impl Into<String>,
        hosts: Vec<String>,
        initial_host: impl Into<String>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let user = user.into();
        let initial_host = initial_host.into();

        let client = provider.connect(&endpoint, &user, &initial_host).await?;
        Ok(FailoverManager {
            provider,
            endpoint,
            user,
            hosts,
            current: Mutex::new(ClientHandle {
                host: initial_host,
                client,
            }),
        })
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// The handle currently bound; cheap clone of the Arc'd client.
    pub async fn current_handle(&self) -> ClientHandle {
        self.current.lock().await.clone()
    }

    /// Rotate to the next host of the list, wrapping from the last to the
    /// first, and rebind a fresh, uncached connection to it. A current host
    /// that is not in the list rotates to the first entry.
    pub async fn rotate(&self) -> Result<ClientHandle> {
        if self.hosts.is_empty() {
            return Err(SinkError::NoHosts);
        }

        let mut current = self.current.lock().await;
        let next_host = match self.hosts.iter().position(|h| *h == current.host) {
            Some(at) => self.hosts[(at + 1) % self.hosts.len()].clone(),
            None => self.hosts[0].clone(),
        };

        info!(
            from = %current.host,
            to = %next_host,
            "rebinding client to the next namenode host"
        );
        let client = self
            .provider
            .connect(&self.endpoint, &self.user, &next_host)
            .await?;
        let handle = ClientHandle {
            host: next_host,
            client,
        };
        *current = handle.clone();
        Ok(handle)
    }
}

impl fmt::Debug for FailoverManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailoverManager")
            .field("endpoint", &self.endpoint)
            .field("user", &self.user)
            .field("hosts", &self.hosts)
            .finish()
    }
}
