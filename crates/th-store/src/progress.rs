//! Game progress and the per-player progress snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::player::PlayerPatch;

/// What the player has achieved in the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameProgress {
    /// Location the player is currently exploring.
    pub current_location: Option<String>,
    /// Collected fragment ids.
    pub fragments: BTreeSet<String>,
    /// Learned skill ids.
    pub skills: BTreeSet<String>,
    /// Times the player has been revived.
    pub revives: u32,
    /// Completed location ids.
    pub completed_locations: BTreeSet<String>,
}

impl GameProgress {
    /// Whether the location has already been completed.
    pub fn is_completed(&self, location_id: &str) -> bool {
        self.completed_locations.contains(location_id)
    }

    /// Whether the fragment has been collected.
    pub fn has_fragment(&self, fragment_id: &str) -> bool {
        self.fragments.contains(fragment_id)
    }
}

/// The record persisted per player: game progress plus player fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Saved game progress.
    pub game_state: GameProgress,
    /// Saved player fields; present fields win over in-memory ones on load.
    pub player: PlayerPatch,
}
