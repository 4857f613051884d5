#[cfg(test)]
mod tests {
    use crate::config::{schema, SinkConfig};

    /// Test: an empty configuration document resolves to the defaults
    #[test]
    fn test_defaults_from_empty_document() {
        let config: SinkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.user, "hdfs");
        assert_eq!(config.connection, "default");
        assert!(config.namenode_list.is_empty());
        assert!(!config.can_failover());
    }

    #[test]
    fn test_failover_needs_two_hosts() {
        let mut config = SinkConfig {
            namenode_list: vec!["h1".to_string()],
            ..SinkConfig::default()
        };
        assert!(!config.can_failover());

        config.namenode_list.push("h2".to_string());
        assert!(config.can_failover());
    }

    /// Test: the schema names every recognized option with a default that
    /// matches the deserialized defaults
    #[test]
    fn test_schema_matches_defaults() {
        let entries = schema();
        let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["user", "connection", "namenode_list"]);

        let defaults = SinkConfig::default();
        assert_eq!(entries[0].default, serde_json::json!(defaults.user));
        assert_eq!(entries[1].default, serde_json::json!(defaults.connection));
        assert_eq!(
            entries[2].default,
            serde_json::json!(defaults.namenode_list)
        );
    }
}
