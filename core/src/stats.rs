use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::store::StorageKey;

/// Highest score, awarded for an instant win.
pub const MAX_SCORE: u32 = 1000;

/// Every won game is worth at least this much, however long it took.
pub const MIN_WIN_SCORE: u32 = 100;

/// Durable aggregate counters across games. Only wins are recorded; an
/// abandoned game leaves every counter untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStats {
    pub games_played: u32,
    pub games_won: u32,
    pub total_score: u64,
    pub best_streak: u32,
    pub current_streak: u32,
    pub photos_uploaded: u32,
}

impl SessionStats {
    /// Record a won game and return its score.
    pub fn record_win(&mut self, duration: TimeDelta) -> u32 {
        let score = score_for(duration);
        self.games_played += 1;
        self.games_won += 1;
        self.total_score += u64::from(score);
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
        log::debug!(
            "Win recorded, score: {}, streak: {}",
            score,
            self.current_streak
        );
        score
    }

    /// Called by the capture flow after a successful upload.
    pub fn record_photo_upload(&mut self) {
        self.photos_uploaded = self.photos_uploaded.saturating_add(1);
    }
}

impl StorageKey for SessionStats {
    const KEY: &'static str = "spotto:stats:v1";
}

/// Score for a won game: one point off the maximum per whole second played.
pub fn score_for(duration: TimeDelta) -> u32 {
    let secs = u32::try_from(duration.num_seconds().max(0)).unwrap_or(u32::MAX);
    MAX_SCORE.saturating_sub(secs).max(MIN_WIN_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_second_win_scores_950() {
        assert_eq!(score_for(TimeDelta::milliseconds(50_000)), 950);
    }

    #[test]
    fn very_long_win_hits_the_score_floor() {
        assert_eq!(score_for(TimeDelta::milliseconds(2_000_000)), 100);
    }

    #[test]
    fn instant_win_scores_the_maximum() {
        assert_eq!(score_for(TimeDelta::zero()), MAX_SCORE);
        assert_eq!(score_for(TimeDelta::milliseconds(900)), MAX_SCORE);
    }

    #[test]
    fn sub_second_remainder_is_dropped() {
        assert_eq!(score_for(TimeDelta::milliseconds(50_900)), 950);
    }

    #[test]
    fn three_wins_accumulate_streaks_and_counters() {
        let mut stats = SessionStats::default();
        for _ in 0..3 {
            stats.record_win(TimeDelta::seconds(10));
        }

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.total_score, 3 * 990);
    }

    #[test]
    fn photo_uploads_count_separately() {
        let mut stats = SessionStats::default();
        stats.record_photo_upload();
        stats.record_photo_upload();
        assert_eq!(stats.photos_uploaded, 2);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn stats_blob_lives_under_a_versioned_key() {
        assert_eq!(<SessionStats as StorageKey>::KEY, "spotto:stats:v1");
    }
}
