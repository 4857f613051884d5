use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

fn default_user() -> String {
    "hdfs".to_string()
}

fn default_connection() -> String {
    "default".to_string()
}

/// Operator configuration for the sink, built once at initialization and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// User to use when writing the files
    #[serde(default = "default_user")]
    pub user: String,
    /// Named connector endpoint the clients bind through
    #[serde(default = "default_connection")]
    pub connection: String,
    /// All known namenode hosts; more than one is needed for high availability
    #[serde(default)]
    pub namenode_list: Vec<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig {
            user: default_user(),
            connection: default_connection(),
            namenode_list: Vec::new(),
        }
    }
}

impl SinkConfig {
    /// Failover is only possible when an alternate host is known.
    pub fn can_failover(&self) -> bool {
        self.namenode_list.len() >= 2
    }
}

/// One recognized configuration option, for the host framework's
/// validation layer.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigEntry {
    pub name: &'static str,
    pub doc: &'static str,
    pub default: Value,
}

/// Enumerates the options recognized by the sink with their documentation
/// and defaults.
pub fn schema() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry {
            name: "user",
            doc: "User to use when writing the files. Default: \"hdfs\"",
            default: json!("hdfs"),
        },
        ConfigEntry {
            name: "connection",
            doc: "Named connector endpoint the sink binds its clients through",
            default: json!("default"),
        },
        ConfigEntry {
            name: "namenode_list",
            doc: "A list containing all namenode hosts, this option is needed for high availability",
            default: json!([]),
        },
    ]
}
