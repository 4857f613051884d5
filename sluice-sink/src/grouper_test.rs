#[cfg(test)]
mod tests {
    use crate::grouper::FileGroup;
    use sluice_core::Record;

    /// Test: grouping preserves first-appearance file order and per-file
    /// chunk order
    ///
    /// Purpose
    /// - Appends must apply in batch order, so the group has to keep both the
    ///   order files first appear in and the order of chunks within a file.
    ///
    /// Flow
    /// - Build a batch interleaving records for "/a" and "/b".
    ///
    /// Expected
    /// - Files come out as ["/a", "/b"]; "/a" holds [x, y] and "/b" holds [z].
    #[test]
    fn test_group_preserves_order() {
        let batch = vec![
            Record::new("/a", b"x".to_vec()),
            Record::new("/a", b"y".to_vec()),
            Record::new("/b", b"z".to_vec()),
        ];

        let group = FileGroup::from_batch(&batch);
        let entries = group.into_entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "/a");
        assert_eq!(entries[0].1, vec![b"x".to_vec(), b"y".to_vec()]);
        assert_eq!(entries[1].0, "/b");
        assert_eq!(entries[1].1, vec![b"z".to_vec()]);
    }

    /// Test: grouping does not deduplicate or filter
    ///
    /// Purpose
    /// - The grouper is a pure partitioning step; identical and empty chunks
    ///   pass through untouched (empty chunks are skipped later, by the
    ///   file writer).
    #[test]
    fn test_group_keeps_duplicates_and_empty_chunks() {
        let batch = vec![
            Record::new("/a", b"x".to_vec()),
            Record::new("/a", b"x".to_vec()),
            Record::new("/a", Vec::new()),
        ];

        let group = FileGroup::from_batch(&batch);
        let entries = group.into_entries();

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].1,
            vec![b"x".to_vec(), b"x".to_vec(), Vec::new()]
        );
    }

    #[test]
    fn test_group_empty_batch() {
        let group = FileGroup::from_batch(&[]);
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
    }

    /// Test: files interleaved across the batch all key back to one entry
    #[test]
    fn test_group_interleaved_files() {
        let batch = vec![
            Record::new("/logs/a", b"1".to_vec()),
            Record::new("/logs/b", b"2".to_vec()),
            Record::new("/logs/a", b"3".to_vec()),
            Record::new("/logs/c", b"4".to_vec()),
            Record::new("/logs/b", b"5".to_vec()),
        ];

        let group = FileGroup::from_batch(&batch);
        let paths: Vec<&str> = group.iter().map(|(path, _)| path).collect();
        assert_eq!(paths, vec!["/logs/a", "/logs/b", "/logs/c"]);

        let chunks: Vec<&[Vec<u8>]> = group.iter().map(|(_, chunks)| chunks).collect();
        assert_eq!(chunks[0], &[b"1".to_vec(), b"3".to_vec()]);
        assert_eq!(chunks[1], &[b"2".to_vec(), b"5".to_vec()]);
        assert_eq!(chunks[2], &[b"4".to_vec()]);
    }
}
