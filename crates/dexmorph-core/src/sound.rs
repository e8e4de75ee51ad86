//! Palette sound lists.

use log::trace;
use serde_json::{Map, Value};

use crate::normalize::{ensure_namespace, stringify};

/// Audible range assigned to every converted sound.
pub const SOUND_RANGE: u32 = 14;

/// A namespaced sound reference with its audible range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    sound_id: String,
    range: u32,
}

impl SoundEntry {
    /// Create a sound entry, qualifying the id with the default namespace.
    pub fn new(sound_id: &str) -> Self {
        Self {
            sound_id: ensure_namespace(sound_id),
            range: SOUND_RANGE,
        }
    }

    /// Get the namespaced sound id.
    pub fn sound_id(&self) -> &str {
        &self.sound_id
    }

    /// Get the audible range.
    pub fn range(&self) -> u32 {
        self.range
    }
}

impl From<SoundEntry> for Value {
    fn from(entry: SoundEntry) -> Self {
        let mut map = Map::new();
        map.insert("sound_id".to_string(), Value::String(entry.sound_id));
        map.insert("range".to_string(), Value::from(entry.range));
        Value::Object(map)
    }
}

/// Convert a legacy sound list into namespaced sound entries.
///
/// Anything other than an array yields an empty list. Entries are stringified
/// and trimmed; blank entries are dropped. Order is preserved and duplicates
/// are kept.
///
/// # Examples
///
/// ```
/// use dexmorph_core::sound::convert_sounds;
/// use serde_json::json;
///
/// let sounds = convert_sounds(Some(&json!(["cry", " ", "minecraft:step"])));
/// assert_eq!(sounds.len(), 2);
/// assert_eq!(sounds[0].sound_id(), "pixelmon:cry");
/// assert_eq!(sounds[1].sound_id(), "minecraft:step");
/// ```
pub fn convert_sounds(sounds: Option<&Value>) -> Vec<SoundEntry> {
    let Some(Value::Array(sounds)) = sounds else {
        return Vec::new();
    };

    let entries: Vec<SoundEntry> = sounds
        .iter()
        .filter_map(stringify)
        .filter(|sound| !sound.trim().is_empty())
        .map(|sound| SoundEntry::new(&sound))
        .collect();
    if entries.len() < sounds.len() {
        trace!(dropped = sounds.len() - entries.len(); "Dropped blank sound entries");
    }
    entries
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_convert_sounds_non_array() {
        assert!(convert_sounds(None).is_empty());
        assert!(convert_sounds(Some(&Value::Null)).is_empty());
        assert!(convert_sounds(Some(&json!("cry"))).is_empty());
        assert!(convert_sounds(Some(&json!({"cry": 1}))).is_empty());
    }

    #[test]
    fn test_convert_sounds_empty_array() {
        assert!(convert_sounds(Some(&json!([]))).is_empty());
    }

    #[test]
    fn test_convert_sounds_preserves_order_and_duplicates() {
        let sounds = convert_sounds(Some(&json!(["b", "a", "b"])));
        let ids: Vec<_> = sounds.iter().map(SoundEntry::sound_id).collect();
        assert_eq!(ids, ["pixelmon:b", "pixelmon:a", "pixelmon:b"]);
    }

    #[test]
    fn test_convert_sounds_drops_blank_and_null() {
        let sounds = convert_sounds(Some(&json!(["", "  ", null, "cry"])));
        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].sound_id(), "pixelmon:cry");
    }

    #[test]
    fn test_convert_sounds_stringifies_scalars() {
        let sounds = convert_sounds(Some(&json!([42])));
        assert_eq!(sounds[0].sound_id(), "pixelmon:42");
    }

    #[test]
    fn test_sound_entry_value() {
        let value = Value::from(SoundEntry::new("cry"));
        assert_eq!(value, json!({"sound_id": "pixelmon:cry", "range": 14}));
    }
}
