//! Tests for progress tracking across single and batch runs

#[cfg(test)]
mod tests {
    use rollpeel::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use rollpeel::io::progress::ProgressManager;
    use std::path::Path;

    // Tests files are registered as they start
    // Verified by registering files only on completion
    #[test]
    fn test_tracks_started_files() {
        let mut manager = ProgressManager::new();
        manager.initialize(2);

        manager.start_file(0, Path::new("a.txt"));
        manager.start_file(1, Path::new("b.txt"));
        manager.complete_file(0, "a.txt: accessible=4 removed=9");

        assert_eq!(manager.tracked_files(), 2);
        manager.finish();
    }

    // Tests batch mode handles more files than visible bars
    // Verified by creating one bar per file
    #[test]
    fn test_batch_mode() {
        let mut manager = ProgressManager::default();
        let file_count = MAX_INDIVIDUAL_PROGRESS_BARS * 3;
        manager.initialize(file_count);

        for index in 0..file_count {
            manager.start_file(index, Path::new("grid.txt"));
            manager.complete_file(index, "done");
        }

        assert_eq!(manager.tracked_files(), file_count);
        manager.finish();
    }

    // Tests completing an unknown index is ignored
    // Verified by indexing file states without bounds checks
    #[test]
    fn test_complete_unknown_file() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);

        manager.complete_file(7, "done");

        assert_eq!(manager.tracked_files(), 0);
        manager.finish();
    }
}
