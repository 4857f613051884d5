mod errors;
pub use errors::{DfsError, Result};

mod record;
pub use record::{Batch, Record};

mod client;
pub use client::{ClientProvider, DfsClient, FileStatus};

// In-memory cluster, used for testing purposes
mod memory;
pub use memory::{MemoryCluster, MemoryDfs, MemoryProvider, Operation};

// Unit tests
#[cfg(test)]
mod memory_test;
