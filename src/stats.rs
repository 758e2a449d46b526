use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const STATS_DIR: &str = "wordle-clone";
const STATS_FILE: &str = "stats.json";

/// Aggregate results across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl Statistics {
    /// Fold one finished session into the totals. Counters stop at `u32::MAX`.
    pub fn record_result(&mut self, won: bool) {
        self.games_played = self.games_played.saturating_add(1);
        if won {
            self.games_won = self.games_won.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Rounded share of games won, 0 before any game is played.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        let pct = f64::from(self.games_won) * 100.0 / f64::from(self.games_played);
        pct.round() as u32
    }

    fn check(self) -> Result<Self, StatsError> {
        if self.games_won > self.games_played {
            return Err(StatsError::Inconsistent("more games won than played"));
        }
        if self.max_streak > self.games_won {
            return Err(StatsError::Inconsistent("best streak longer than games won"));
        }
        if self.current_streak > self.max_streak {
            return Err(StatsError::Inconsistent("current streak longer than best streak"));
        }
        Ok(self)
    }
}

/// Default location of the statistics record, under the user's data directory.
#[must_use]
pub fn get_stats_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(STATS_DIR).join(STATS_FILE))
}

/// Load statistics. A missing file is `Ok(None)`.
///
/// # Errors
/// Returns `StatsError` if the file cannot be read, is not a statistics
/// record, or holds counters that contradict each other.
pub fn read_stats(path: &Path) -> Result<Option<Statistics>, StatsError> {
    match fs::read_to_string(path) {
        Ok(data) => {
            let stats: Statistics = serde_json::from_str(&data)?;
            stats.check().map(Some)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// # Errors
/// Returns `StatsError` if the directory or file cannot be written.
pub fn write_stats(path: &Path, stats: &Statistics) -> Result<(), StatsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(stats)?)?;
    Ok(())
}
