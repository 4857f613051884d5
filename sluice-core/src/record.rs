use serde::{Deserialize, Serialize};

/// One output record: a payload destined for a specific file on the
/// distributed filesystem. Produced by the host framework, consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Absolute path of the destination file
    pub path: String,
    /// Payload bytes, appended to the destination file as one chunk
    pub data: Vec<u8>,
}

impl Record {
    pub fn new(path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// An ordered sequence of records delivered together; the unit of
/// success or failure for the sink.
pub type Batch = Vec<Record>;
