//! Scoreboard values and text
//!
//! Scores are counted in ticks internally. The current run is shown as
//! distance; the best score is shown as the stored tick count.

use serde::Serialize;

/// Display values for the score panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Scoreboard {
    /// Current run in distance units
    pub distance: u64,
    /// Best score as stored (ticks)
    pub best: u64,
}

impl Scoreboard {
    pub fn lines(&self) -> (String, String) {
        (format_distance(self.distance), format_best(self.best))
    }
}

/// `00042 m`
pub fn format_distance(distance: u64) -> String {
    format!("{distance:05} m")
}

/// `HI: 00042`
pub fn format_best(best: u64) -> String {
    format!("HI: {best:05}")
}
