//! The progress store.
//!
//! `ProgressStore` holds the player, their game progress, the leaderboard
//! and settings. Every mutating action runs to completion, including its
//! storage write, before returning. Actions that change progress do
//! nothing while no player is logged in.

use tracing::{debug, warn};

use th_mechanics::exp_for_level;

use crate::config::StoreConfig;
use crate::envelope;
use crate::error::{StoreError, StoreResult};
use crate::player::{Player, PlayerPatch};
use crate::progress::{GameProgress, ProgressSnapshot};
use crate::ranking::{RankingEntry, Rankings};
use crate::settings::Settings;
use crate::storage::KeyValueStorage;

/// Damage applied by [`ProgressStore::take_hit`].
pub const DEFAULT_DAMAGE: i32 = 1;

/// Single source of truth for player, progress and ranking state.
pub struct ProgressStore<S: KeyValueStorage> {
    player: Player,
    game_state: GameProgress,
    rankings: Rankings,
    settings: Settings,
    config: StoreConfig,
    storage: S,
}

impl<S: KeyValueStorage> ProgressStore<S> {
    /// Create a logged-out store over `storage`.
    pub fn new(storage: S, config: StoreConfig) -> Self {
        Self {
            player: Player::anonymous(config.max_hp),
            game_state: GameProgress::default(),
            rankings: Rankings::new(),
            settings: Settings::default(),
            config,
            storage,
        }
    }

    /// The current player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The current game progress.
    pub fn game_state(&self) -> &GameProgress {
        &self.game_state
    }

    /// The leaderboard.
    pub fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    /// Audio settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // -- derived state ---------------------------------------------------

    /// Whether a player is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.player.id.is_some()
    }

    /// 1-based leaderboard position of the current player, or 0.
    pub fn player_rank(&self) -> usize {
        self.player
            .id
            .as_deref()
            .map_or(0, |id| self.rankings.position(id))
    }

    /// Number of fragments collected so far.
    pub fn collected_fragment_count(&self) -> usize {
        self.game_state.fragments.len()
    }

    /// Number of fragments in the game.
    pub fn total_fragments(&self) -> usize {
        self.config.total_fragments
    }

    // -- session ---------------------------------------------------------

    /// Merge a login payload into the player and load their saved progress.
    pub fn login(&mut self, patch: PlayerPatch) {
        self.player.merge(patch);
        debug!(player = ?self.player.id, "login");
        self.load_progress();
    }

    /// Reset the player to a logged-out default.
    ///
    /// Saved progress and rankings stay in storage, and the in-memory game
    /// progress is kept until the next login overwrites it.
    pub fn logout(&mut self) {
        debug!(player = ?self.player.id, "logout");
        self.player = Player::anonymous(self.config.max_hp);
    }

    // -- gameplay --------------------------------------------------------

    /// Collect a fragment. Returns whether it was new.
    pub fn add_fragment(&mut self, fragment_id: &str) -> bool {
        if !self.is_logged_in() || !self.game_state.fragments.insert(fragment_id.to_string()) {
            return false;
        }
        debug!(fragment = fragment_id, "fragment collected");
        self.save_progress();
        true
    }

    /// Complete a location, granting experience and coins the first time.
    ///
    /// Returns whether the location was newly completed. Repeat completions
    /// change nothing and write nothing.
    pub fn complete_location(&mut self, location_id: &str) -> bool {
        if !self.is_logged_in()
            || !self
                .game_state
                .completed_locations
                .insert(location_id.to_string())
        {
            return false;
        }
        self.player.experience = self
            .player
            .experience
            .saturating_add(self.config.location_exp);
        self.player.coins = self.player.coins.saturating_add(self.config.location_coins);
        debug!(location = location_id, "location completed");
        self.check_level_up();
        self.save_progress();
        self.update_rankings();
        true
    }

    /// Lose `amount` hit points, never dropping below zero.
    ///
    /// A non-positive amount leaves hit points unchanged; progress is saved
    /// either way. Returns whether the player is still alive.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if !self.is_logged_in() {
            return self.player.is_alive();
        }
        if let Ok(amount) = u32::try_from(amount) {
            self.player.hp = self.player.hp.saturating_sub(amount);
        }
        debug!(amount, hp = self.player.hp, "damage taken");
        self.save_progress();
        self.player.is_alive()
    }

    /// [`take_damage`](Self::take_damage) with the default amount.
    pub fn take_hit(&mut self) -> bool {
        self.take_damage(DEFAULT_DAMAGE)
    }

    /// Bring a defeated player back at full health.
    ///
    /// Returns false (and changes nothing) unless the player is logged in
    /// and at zero hit points.
    pub fn revive(&mut self) -> bool {
        if !self.is_logged_in() || self.player.is_alive() {
            return false;
        }
        self.player.hp = self.config.max_hp;
        self.game_state.revives += 1;
        debug!(revives = self.game_state.revives, "revived");
        self.save_progress();
        true
    }

    /// Move the player to a location (or nowhere).
    pub fn set_current_location(&mut self, location_id: Option<&str>) {
        if !self.is_logged_in() || self.game_state.current_location.as_deref() == location_id {
            return;
        }
        self.game_state.current_location = location_id.map(str::to_string);
        self.save_progress();
    }

    /// Learn a skill. Returns whether it was new.
    pub fn learn_skill(&mut self, skill_id: &str) -> bool {
        if !self.is_logged_in() || !self.game_state.skills.insert(skill_id.to_string()) {
            return false;
        }
        self.save_progress();
        true
    }

    /// Flip background music on or off, returning the new value.
    pub fn toggle_music(&mut self) -> bool {
        self.settings.music_enabled = !self.settings.music_enabled;
        self.settings.music_enabled
    }

    /// Flip sound effects on or off, returning the new value.
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.settings.sound_enabled
    }

    /// Advance at most one level when experience meets the requirement.
    fn check_level_up(&mut self) {
        let needed = exp_for_level(self.player.level);
        if self.player.experience >= needed {
            self.player.level = self.player.level.saturating_add(1);
            self.player.experience = 0;
            self.player.hp = self.config.max_hp;
            debug!(level = self.player.level, "level up");
        }
    }

    // -- persistence -----------------------------------------------------

    /// Save the progress snapshot, logging any storage failure.
    pub fn save_progress(&mut self) {
        match self.try_save_progress() {
            Ok(()) | Err(StoreError::NotLoggedIn) => {}
            Err(e) => warn!(error = %e, "progress not saved"),
        }
    }

    /// Save the progress snapshot under the player's key.
    pub fn try_save_progress(&mut self) -> StoreResult<()> {
        let id = self.player.id.as_deref().ok_or(StoreError::NotLoggedIn)?;
        let key = self.config.progress_key(id);
        let snapshot = ProgressSnapshot {
            game_state: self.game_state.clone(),
            player: PlayerPatch::from(&self.player),
        };
        let raw = envelope::encode(&snapshot)?;
        self.storage.set(&key, &raw)
    }

    /// Load saved progress for the logged-in player.
    ///
    /// Missing, corrupt or unsupported records leave the in-memory state
    /// untouched.
    pub fn load_progress(&mut self) {
        match self.try_load_progress() {
            Ok(_) | Err(StoreError::NotLoggedIn) => {}
            Err(e) => warn!(error = %e, "ignoring saved progress"),
        }
    }

    /// Load saved progress, returning whether a record was applied.
    pub fn try_load_progress(&mut self) -> StoreResult<bool> {
        let id = self.player.id.as_deref().ok_or(StoreError::NotLoggedIn)?;
        let key = self.config.progress_key(id);
        let Some(raw) = self.storage.get(&key)? else {
            return Ok(false);
        };
        let snapshot: ProgressSnapshot = envelope::decode(&raw)?;
        let mut saved = snapshot.player;
        // The record is found by the login id, which a stored id never replaces.
        saved.id = None;
        self.game_state = snapshot.game_state;
        self.player.merge(saved);
        self.player.level = self.player.level.max(1);
        self.player.hp = self.player.hp.min(self.config.max_hp);
        debug!(key = %key, "progress loaded");
        Ok(true)
    }

    /// Refresh the current player's leaderboard entry and save the board.
    pub fn update_rankings(&mut self) {
        match self.try_update_rankings() {
            Ok(()) | Err(StoreError::NotLoggedIn) => {}
            Err(e) => warn!(error = %e, "rankings not saved"),
        }
    }

    /// Refresh the current player's leaderboard entry and save the board.
    ///
    /// The in-memory board is updated even when the write fails.
    pub fn try_update_rankings(&mut self) -> StoreResult<()> {
        let id = self.player.id.clone().ok_or(StoreError::NotLoggedIn)?;
        self.rankings.upsert(RankingEntry {
            id,
            name: self.player.name.clone(),
            level: self.player.level,
            experience: self.player.experience,
            fragments: self.game_state.fragments.len(),
        });
        let raw = envelope::encode(&self.rankings)?;
        self.storage.set(&self.config.rankings_key, &raw)
    }

    /// Load the leaderboard, leaving it empty when absent or unreadable.
    pub fn load_rankings(&mut self) {
        if let Err(e) = self.try_load_rankings() {
            warn!(error = %e, "ignoring saved rankings");
        }
    }

    /// Load the leaderboard, returning whether a record was found.
    pub fn try_load_rankings(&mut self) -> StoreResult<bool> {
        let Some(raw) = self.storage.get(&self.config.rankings_key)? else {
            return Ok(false);
        };
        let entries: Vec<RankingEntry> = envelope::decode(&raw)?;
        self.rankings = Rankings::from_entries(entries);
        Ok(true)
    }
}
