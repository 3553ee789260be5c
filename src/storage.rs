/// High-score persistence — a single numeric value in a dot-file.
///
/// Storage being absent, unreadable, or garbled degrades to "no previous
/// high score"; nothing in here can abort the game-over flow.

use std::path::{Path, PathBuf};

pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".crossing_game_score")
}

/// `None` means no previous score exists — distinct from a recorded 0.
pub fn load_high_score(path: &Path) -> Option<u32> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

/// Best-effort write; a failed save is silently dropped.
pub fn save_high_score(path: &Path, score: u32) {
    let _ = std::fs::write(path, score.to_string());
}

/// Outcome of the game-over settlement, shown on the summary screen.
pub struct HighScoreReport {
    pub new_record: bool,
    /// The record after settlement: the new score when beaten, otherwise
    /// the standing best.
    pub best: u32,
}

/// Compare the final score against the persisted best and write it back when
/// beaten.  No previous record counts as beaten, never as a failed
/// comparison, so the very first game always sets a record.
pub fn settle_high_score(path: &Path, score: u32) -> HighScoreReport {
    let previous = load_high_score(path);
    let new_record = previous.map_or(true, |best| score > best);
    if new_record {
        save_high_score(path, score);
    }
    HighScoreReport {
        new_record,
        best: if new_record { score } else { previous.unwrap_or(0) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_is_no_previous_score() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_high_score(&dir.path().join("missing")), None);
    }

    #[test]
    fn garbage_contents_is_no_previous_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(load_high_score(&path), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        save_high_score(&path, 3);
        assert_eq!(load_high_score(&path), Some(3));
    }

    #[test]
    fn load_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        std::fs::write(&path, " 12\n").unwrap();
        assert_eq!(load_high_score(&path), Some(12));
    }

    #[test]
    fn settle_with_no_previous_score_sets_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        let report = settle_high_score(&path, 3);
        assert!(report.new_record);
        assert_eq!(report.best, 3);
        assert_eq!(load_high_score(&path), Some(3)); // persisted
    }

    #[test]
    fn settle_below_previous_best_keeps_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        save_high_score(&path, 5);
        let report = settle_high_score(&path, 3);
        assert!(!report.new_record);
        assert_eq!(report.best, 5);
        assert_eq!(load_high_score(&path), Some(5)); // not overwritten
    }

    #[test]
    fn settle_equal_score_is_not_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        save_high_score(&path, 3);
        let report = settle_high_score(&path, 3);
        assert!(!report.new_record);
        assert_eq!(report.best, 3);
    }

    #[test]
    fn settle_beats_previous_best() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        save_high_score(&path, 2);
        let report = settle_high_score(&path, 4);
        assert!(report.new_record);
        assert_eq!(report.best, 4);
        assert_eq!(load_high_score(&path), Some(4));
    }

    #[test]
    fn settle_zero_score_with_no_previous_is_a_record() {
        // Absent means beaten, never a failed comparison
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score");
        let report = settle_high_score(&path, 0);
        assert!(report.new_record);
        assert_eq!(load_high_score(&path), Some(0));
    }
}
