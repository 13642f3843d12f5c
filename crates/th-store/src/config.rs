//! Configuration for a progress store.

/// Rewards, limits and storage keys used by a [`ProgressStore`](crate::ProgressStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum (and starting) hit points.
    pub max_hp: u32,
    /// Experience granted for completing a location.
    pub location_exp: u32,
    /// Coins granted for completing a location.
    pub location_coins: u32,
    /// Number of fragments that exist in the game.
    pub total_fragments: usize,
    /// Prefix of per-player progress keys; the player id is appended.
    pub progress_key_prefix: String,
    /// Key of the global rankings record.
    pub rankings_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_hp: 3,
            location_exp: 100,
            location_coins: 50,
            total_fragments: 3,
            progress_key_prefix: "gameProgress_".to_string(),
            rankings_key: "treasureRankings".to_string(),
        }
    }
}

impl StoreConfig {
    /// Set the maximum hit points (at least 1).
    pub fn with_max_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = max_hp.max(1);
        self
    }

    /// Set the experience and coin rewards for completing a location.
    pub fn with_location_rewards(mut self, exp: u32, coins: u32) -> Self {
        self.location_exp = exp;
        self.location_coins = coins;
        self
    }

    /// Set the number of fragments in the game.
    pub fn with_total_fragments(mut self, total: usize) -> Self {
        self.total_fragments = total;
        self
    }

    /// Storage key holding the progress snapshot of `player_id`.
    pub fn progress_key(&self, player_id: &str) -> String {
        format!("{}{player_id}", self.progress_key_prefix)
    }
}
