//! Declarative key-order policy.
//!
//! Output key order is data, not control flow: each scope has a table of
//! preferred keys and a single routine, [`ordered`], applies it. Preferred keys
//! come first in table order; every other key follows in its original order.
//! Reordering never adds or removes keys.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::growth::GROWTH_DATA_KEY;

/// Top-level document keys.
pub const TOP_ORDER: &[&str] = &["name", "dex", "defaultForms", "forms", "generation"];

/// Leading block of a form, ending with the palette groups.
pub const FORM_HEAD_ORDER: &[&str] = &[
    "name",
    "experienceGroup",
    "dimensions",
    "moves",
    "abilities",
    "movement",
    "aggression",
    "battleStats",
    "tags",
    "spawn",
    "possibleGenders",
    "genderProperties",
];

/// Trailing block of a form. Growth data is always last.
pub const FORM_TAIL_ORDER: &[&str] = &[
    "eggGroups",
    "types",
    "preEvolutions",
    "defaultBaseForm",
    "megaItems",
    "megas",
    "gigantamax",
    "eggCycles",
    "weight",
    "catchRate",
    "malePercentage",
    "evolutions",
    "evYields",
    GROWTH_DATA_KEY,
];

/// Keys of a form's spawn block.
pub const SPAWN_ORDER: &[&str] = &[
    "baseExp",
    "baseFriendship",
    "spawnLevel",
    "spawnLevelRange",
    "spawnLocations",
];

/// Reorder an object's keys by a preference table.
///
/// # Examples
///
/// ```
/// use dexmorph_core::ordering::{ordered, TOP_ORDER};
/// use serde_json::json;
///
/// let doc = json!({"forms": [], "extra": 1, "name": "Eevee"});
/// let doc = ordered(doc.as_object().unwrap().clone(), TOP_ORDER);
/// let keys: Vec<_> = doc.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["name", "forms", "extra"]);
/// ```
pub fn ordered(object: Map<String, Value>, order: &[&str]) -> Map<String, Value> {
    let mut remaining: IndexMap<String, Value> = object.into_iter().collect();
    let mut out = Map::new();

    for key in order {
        if let Some(value) = remaining.shift_remove(*key) {
            out.insert((*key).to_string(), value);
        }
    }
    out.extend(remaining);

    out
}

/// Reorder a value's keys if it is an object; return anything else unchanged.
pub fn ordered_value(value: Value, order: &[&str]) -> Value {
    match value {
        Value::Object(object) => Value::Object(ordered(object, order)),
        other => other,
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn object_strategy() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::vec(
            (
                prop::sample::select(vec![
                    "name", "dex", "forms", "generation", "defaultForms", "x", "y", "zeta",
                ]),
                any::<i64>(),
            ),
            0..8,
        )
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), Value::from(value)))
                .collect()
        })
    }

    /// Reordering keeps exactly the same key/value pairs.
    fn check_ordered_preserves_entries(object: Map<String, Value>) -> Result<(), TestCaseError> {
        let result = ordered(object.clone(), TOP_ORDER);
        prop_assert_eq!(result.len(), object.len());
        for (key, value) in &object {
            prop_assert_eq!(result.get(key), Some(value));
        }
        Ok(())
    }

    /// Preferred keys appear in table order, before any other key.
    fn check_ordered_prefix(object: Map<String, Value>) -> Result<(), TestCaseError> {
        let result = ordered(object.clone(), TOP_ORDER);
        let expected: Vec<&str> = TOP_ORDER
            .iter()
            .copied()
            .filter(|key| object.contains_key(*key))
            .collect();
        let actual: Vec<&str> = result
            .keys()
            .take(expected.len())
            .map(String::as_str)
            .collect();
        prop_assert_eq!(actual, expected);
        Ok(())
    }

    /// Non-preferred keys keep their relative order.
    fn check_ordered_rest_stable(object: Map<String, Value>) -> Result<(), TestCaseError> {
        let result = ordered(object.clone(), TOP_ORDER);
        let rest = |map: &Map<String, Value>| -> Vec<String> {
            map.keys()
                .filter(|key| !TOP_ORDER.contains(&key.as_str()))
                .cloned()
                .collect()
        };
        prop_assert_eq!(rest(&result), rest(&object));
        Ok(())
    }

    proptest! {
        #[test]
        fn ordered_preserves_entries(object in object_strategy()) {
            check_ordered_preserves_entries(object)?;
        }

        #[test]
        fn ordered_prefix(object in object_strategy()) {
            check_ordered_prefix(object)?;
        }

        #[test]
        fn ordered_rest_stable(object in object_strategy()) {
            check_ordered_rest_stable(object)?;
        }
    }
}
