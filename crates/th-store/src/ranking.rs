//! Leaderboard entries and ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A player's summarized standing on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Player id.
    pub id: String,
    /// Name at the time the entry was created.
    pub name: String,
    /// Player level.
    pub level: u32,
    /// Experience towards the next level.
    pub experience: u32,
    /// Number of collected fragments.
    pub fragments: usize,
}

impl RankingEntry {
    /// Leaderboard order: level, then fragments, then experience, all descending.
    pub fn leaderboard_cmp(&self, other: &Self) -> Ordering {
        other
            .level
            .cmp(&self.level)
            .then_with(|| other.fragments.cmp(&self.fragments))
            .then_with(|| other.experience.cmp(&self.experience))
    }
}

/// The leaderboard, kept sorted after every update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rankings {
    entries: Vec<RankingEntry>,
}

impl Rankings {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a leaderboard from entries, sorting them.
    pub fn from_entries(entries: Vec<RankingEntry>) -> Self {
        let mut rankings = Self { entries };
        rankings.sort();
        rankings
    }

    /// Entries in leaderboard order.
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the leaderboard is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or update the entry for `entry.id`, then re-sort.
    ///
    /// An existing entry keeps its name; only level, experience and
    /// fragment count are refreshed.
    pub fn upsert(&mut self, entry: RankingEntry) {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                existing.level = entry.level;
                existing.experience = entry.experience;
                existing.fragments = entry.fragments;
            }
            None => self.entries.push(entry),
        }
        self.sort();
    }

    /// 1-based position of `player_id`, or 0 when absent.
    pub fn position(&self, player_id: &str) -> usize {
        self.entries
            .iter()
            .position(|e| e.id == player_id)
            .map_or(0, |i| i + 1)
    }

    fn sort(&mut self) {
        self.entries.sort_by(RankingEntry::leaderboard_cmp);
    }
}
