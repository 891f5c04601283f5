//! High-score persistence
//!
//! The session only needs a get/set for a single number. Stores:
//! - `MemoryStore`: process-lifetime value (tests, headless runs)
//! - `JsonFileStore`: versioned JSON envelope, tmp-then-rename writes

pub mod file;

pub use file::{JsonFileStore, PersistError, SaveEnvelope};

/// Get/set for the best score
///
/// Saving cannot fail from the caller's point of view; stores log their own
/// failures. A missing or unreadable value loads as `None`.
pub trait HighScoreStore {
    fn load_high_score(&self) -> Option<u64>;
    fn save_high_score(&mut self, score: u64);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<u64>,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(score: u64) -> Self {
        Self {
            value: Some(score),
            saves: 0,
        }
    }

    /// Number of saves made through this store
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> Option<u64> {
        self.value
    }

    fn save_high_score(&mut self, score: u64) {
        self.value = Some(score);
        self.saves += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_high_score(), None);
        store.save_high_score(120);
        assert_eq!(store.load_high_score(), Some(120));
        assert_eq!(store.saves(), 1);
        assert_eq!(MemoryStore::with_value(9).load_high_score(), Some(9));
    }
}
