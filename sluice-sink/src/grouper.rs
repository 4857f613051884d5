use sluice_core::Record;
use std::collections::HashMap;

/// Records of one batch partitioned by destination file.
///
/// Files appear in the order of their first record in the batch, and the
/// chunks of one file keep their arrival order, because appends must apply
/// in exactly that order.
#[derive(Debug, Default)]
pub struct FileGroup {
    entries: Vec<(String, Vec<Vec<u8>>)>,
    index: HashMap<String, usize>,
}

impl FileGroup {
    /// Partition a batch into per-file ordered chunk lists. Does not
    /// deduplicate, validate, or reorder anything.
    pub fn from_batch(batch: &[Record]) -> Self {
        let mut group = FileGroup::default();
        for record in batch {
            match group.index.get(&record.path).copied() {
                Some(at) => group.entries[at].1.push(record.data.clone()),
                None => {
                    group.index.insert(record.path.clone(), group.entries.len());
                    group
                        .entries
                        .push((record.path.clone(), vec![record.data.clone()]));
                }
            }
        }
        group
    }

    /// Number of distinct destination files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Vec<u8>])> {
        self.entries
            .iter()
            .map(|(path, chunks)| (path.as_str(), chunks.as_slice()))
    }

    pub fn into_entries(self) -> Vec<(String, Vec<Vec<u8>>)> {
        self.entries
    }
}
