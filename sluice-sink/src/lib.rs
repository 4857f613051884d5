mod errors;
pub use errors::{Result, SinkError};

mod config;
pub use config::{schema, ConfigEntry, SinkConfig};

mod grouper;
pub use grouper::FileGroup;

mod failover;
pub use failover::{ClientHandle, FailoverManager};

mod file_writer;

mod batch_writer;
pub use batch_writer::{BatchWriter, SinkBuilder};

// Unit tests
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod grouper_test;
