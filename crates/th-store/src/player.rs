//! Player identity and stats.

use serde::{Deserialize, Serialize};

/// The player's identity and stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player id; `None` while logged out.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience towards the next level.
    pub experience: u32,
    /// Remaining hit points.
    pub hp: u32,
    /// Coin balance.
    pub coins: u32,
}

impl Player {
    /// A logged-out player at level 1 with full hit points.
    pub fn anonymous(max_hp: u32) -> Self {
        Self {
            id: None,
            name: String::new(),
            level: 1,
            experience: 0,
            hp: max_hp,
            coins: 0,
        }
    }

    /// Overwrite every field present in `patch`, keeping the rest.
    pub fn merge(&mut self, patch: PlayerPatch) {
        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(hp) = patch.hp {
            self.hp = hp;
        }
        if let Some(coins) = patch.coins {
            self.coins = coins;
        }
    }

    /// Whether the player still has hit points left.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::anonymous(3)
    }
}

/// A partial [`Player`]: login payloads and saved player records.
///
/// Absent fields are skipped when serialized, so a patch built from a full
/// player serializes exactly like the player itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPatch {
    /// Player id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Experience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    /// Hit points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    /// Coins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coins: Option<u32>,
}

impl PlayerPatch {
    /// A login payload carrying only an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<&Player> for PlayerPatch {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: Some(player.name.clone()),
            level: Some(player.level),
            experience: Some(player.experience),
            hp: Some(player.hp),
            coins: Some(player.coins),
        }
    }
}
