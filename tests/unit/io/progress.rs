//! Tests for sweep progress tracking

#[cfg(test)]
mod tests {
    use collagrid::io::progress::SweepProgress;

    // Tests quiet progress draws nothing
    // Verified by ignoring the quiet flag
    #[test]
    fn test_quiet_progress_is_hidden() {
        let progress = SweepProgress::new(10, true);

        assert!(progress.is_hidden());
        progress.finish();
    }

    // Tests each finished tile count advances the bar
    // Verified by advancing by the tile count
    #[test]
    fn test_advance() {
        let progress = SweepProgress::new(3, true);

        progress.advance(100);
        progress.advance(101);
        assert_eq!(progress.position(), 2);

        progress.advance(102);
        assert_eq!(progress.position(), 3);
        progress.finish();
    }

    // Tests a visible bar can run and finish
    // Verified by panicking on style construction
    #[test]
    fn test_visible_progress() {
        let progress = SweepProgress::new(1, false);

        progress.advance(1);
        progress.finish();
        assert_eq!(progress.position(), 1);
    }
}
