#[cfg(test)]
mod tests {
    use crate::{ClientProvider, DfsClient, DfsError, MemoryCluster, MemoryProvider, Operation};

    /// Test: only the active host serves requests, others answer standby
    ///
    /// Flow
    /// - Two clients of one cluster, bound to h1 (active) and h2 (standby).
    ///
    /// Expected
    /// - h1 creates and appends; the same calls through h2 are rejected with
    ///   the standby error, and the namespace stays shared across hosts.
    #[tokio::test]
    async fn test_standby_host_rejects_operations() -> Result<(), Box<dyn std::error::Error>> {
        let cluster = MemoryCluster::new("h1");
        let active = cluster.client_for("h1");
        let standby = cluster.client_for("h2");

        active.create("/a", b"x").await?;
        let err = standby.append("/a", b"y").await.unwrap_err();
        assert!(err.is_standby());

        // the namespace is shared: h2 sees the file once it becomes active
        cluster.set_active("h2");
        let status = standby.file_status("/a").await?;
        assert_eq!(status.length, 1);
        assert!(!status.is_dir);
        Ok(())
    }

    /// Test: status of an absent path is a not-found miss, not standby
    #[tokio::test]
    async fn test_missing_path_yields_not_found() {
        let cluster = MemoryCluster::new("h1");
        let client = cluster.client_for("h1");

        let err = client.file_status("/nope").await.unwrap_err();
        assert!(matches!(err, DfsError::NotFound(path) if path == "/nope"));
    }

    /// Test: mkdirs creates the directory and every missing ancestor
    #[tokio::test]
    async fn test_mkdirs_creates_ancestors() -> Result<(), Box<dyn std::error::Error>> {
        let cluster = MemoryCluster::new("h1");
        cluster.client_for("h1").mkdirs("/a/b/c").await?;

        assert!(cluster.dir_exists("/a"));
        assert!(cluster.dir_exists("/a/b"));
        assert!(cluster.dir_exists("/a/b/c"));
        Ok(())
    }

    /// Test: appending to a file that was never created is rejected
    #[tokio::test]
    async fn test_append_requires_existing_file() {
        let cluster = MemoryCluster::new("h1");
        let client = cluster.client_for("h1");

        let err = client.append("/a", b"x").await.unwrap_err();
        assert!(matches!(err, DfsError::Remote(_)));
        assert_eq!(cluster.file("/a"), None);
    }

    /// Test: the operation log records calls in order, rejected ones included
    #[tokio::test]
    async fn test_operations_are_logged_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let cluster = MemoryCluster::new("h1");
        let provider = MemoryProvider::new(cluster.clone());

        let client = provider.connect("default", "hdfs", "h1").await?;
        client.create("/a", b"").await?;
        client.append("/a", b"x").await?;
        let _ = cluster.client_for("h2").append("/a", b"y").await;

        assert_eq!(
            cluster.operations(),
            vec![
                Operation::Connect { host: "h1".into() },
                Operation::Create {
                    host: "h1".into(),
                    path: "/a".into()
                },
                Operation::Append {
                    host: "h1".into(),
                    path: "/a".into(),
                    data: b"x".to_vec()
                },
                Operation::Append {
                    host: "h2".into(),
                    path: "/a".into(),
                    data: b"y".to_vec()
                },
            ]
        );
        assert_eq!(cluster.file("/a"), Some(b"x".to_vec()));
        Ok(())
    }
}
