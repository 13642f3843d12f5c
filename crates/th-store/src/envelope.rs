//! Versioned envelope around every persisted record.
//!
//! Records are stored as `{"version": N, "payload": ...}`. Anything that is
//! not shaped like an envelope is a legacy record from before versioning
//! and is read as version 0. Decoding runs one migration step per version
//! until the payload reaches [`CURRENT_VERSION`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Format version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// A payload tagged with its format version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Format version of `payload`.
    pub version: u32,
    /// The record itself.
    pub payload: T,
}

/// Wrap `payload` in a current-version envelope and serialize it.
pub fn encode<T: Serialize>(payload: &T) -> StoreResult<String> {
    let envelope = Envelope {
        version: CURRENT_VERSION,
        payload,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a stored record, migrating it to the current version.
pub fn decode<T: DeserializeOwned>(raw: &str) -> StoreResult<T> {
    let value: Value = serde_json::from_str(raw)?;
    let (version, payload) = unwrap_envelope(value)?;
    let payload = migrate(version, payload)?;
    Ok(serde_json::from_value(payload)?)
}

fn unwrap_envelope(value: Value) -> StoreResult<(u32, Value)> {
    match value {
        Value::Object(mut map)
            if map.len() == 2 && map.contains_key("version") && map.contains_key("payload") =>
        {
            let found = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or(StoreError::UnsupportedVersion {
                    found: u32::MAX,
                    current: CURRENT_VERSION,
                })?;
            let version = u32::try_from(found).unwrap_or(u32::MAX);
            let payload = map.remove("payload").unwrap_or(Value::Null);
            Ok((version, payload))
        }
        legacy => Ok((0, legacy)),
    }
}

fn migrate(mut version: u32, mut payload: Value) -> StoreResult<Value> {
    if version > CURRENT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: version,
            current: CURRENT_VERSION,
        });
    }
    while version < CURRENT_VERSION {
        payload = match version {
            0 => migrate_v0(payload),
            _ => payload,
        };
        version += 1;
        tracing::debug!(version, "migrated record");
    }
    Ok(payload)
}

/// Legacy records could carry numeric player ids; ids are strings from v1.
///
/// Legacy boards could also hold entries pushed while logged out, with a
/// null or missing id. Those are dropped.
fn migrate_v0(payload: Value) -> Value {
    match payload {
        Value::Array(entries) => Value::Array(
            entries
                .into_iter()
                .filter(|entry| !matches!(entry.get("id"), None | Some(Value::Null)))
                .map(stringify_id)
                .collect(),
        ),
        Value::Object(mut map) => {
            if let Some(player) = map.remove("player") {
                map.insert("player".to_string(), stringify_id(player));
            }
            Value::Object(map)
        }
        other => other,
    }
}

fn stringify_id(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if let Some(Value::Number(n)) = map.get("id") {
                let id = n.to_string();
                map.insert("id".to_string(), Value::String(id));
            }
            Value::Object(map)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerPatch;
    use crate::progress::{GameProgress, ProgressSnapshot};
    use crate::ranking::RankingEntry;

    fn snapshot() -> ProgressSnapshot {
        let mut game_state = GameProgress::default();
        game_state.fragments.insert("f1".to_string());
        game_state.completed_locations.insert("forest".to_string());
        ProgressSnapshot {
            game_state,
            player: PlayerPatch {
                id: Some("p1".to_string()),
                name: Some("Ada".to_string()),
                level: Some(2),
                experience: Some(0),
                hp: Some(3),
                coins: Some(50),
            },
        }
    }

    #[test]
    fn encoded_layout() {
        let raw = encode(&snapshot()).unwrap();
        insta::assert_snapshot!(raw, @r#"{"version":1,"payload":{"gameState":{"currentLocation":null,"fragments":["f1"],"skills":[],"revives":0,"completedLocations":["forest"]},"player":{"id":"p1","name":"Ada","level":2,"experience":0,"hp":3,"coins":50}}}"#);
    }

    #[test]
    fn round_trip() {
        let raw = encode(&snapshot()).unwrap();
        let back: ProgressSnapshot = decode(&raw).unwrap();
        assert_eq!(back, snapshot());
    }

    #[test]
    fn legacy_record_is_migrated() {
        let raw = r#"{"gameState":{"currentLocation":null,"fragments":["f1"],"skills":[],"revives":0,"completedLocations":[]},"player":{"id":17,"name":"Old","level":3,"experience":20,"hp":2,"coins":5}}"#;
        let back: ProgressSnapshot = decode(raw).unwrap();
        assert_eq!(back.player.id.as_deref(), Some("17"));
        assert_eq!(back.player.level, Some(3));
        assert!(back.game_state.has_fragment("f1"));
    }

    #[test]
    fn legacy_rankings_are_migrated() {
        let raw = r#"[{"id":1,"name":"A","level":2,"experience":0,"fragments":1}]"#;
        let back: Vec<RankingEntry> = decode(raw).unwrap();
        assert_eq!(back[0].id, "1");
    }

    #[test]
    fn legacy_rankings_drop_entries_without_id() {
        let raw = r#"[{"id":null,"name":"Ghost","level":1,"experience":0,"fragments":0},{"id":"p1","name":"A","level":2,"experience":0,"fragments":1},{"name":"Nobody","level":1,"experience":0,"fragments":0}]"#;
        let back: Vec<RankingEntry> = decode(raw).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].id, "p1");
    }

    #[test]
    fn newer_version_is_rejected() {
        let raw = r#"{"version":99,"payload":[]}"#;
        let err = decode::<Vec<RankingEntry>>(raw).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedVersion { found: 99, .. }));
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(matches!(
            decode::<ProgressSnapshot>("{not json").unwrap_err(),
            StoreError::Json(_)
        ));
        assert!(decode::<ProgressSnapshot>(r#"{"version":1,"payload":42}"#).is_err());
    }
}
