//! Movement capability detection.
//!
//! Whether a form flies or swims decides which animation clips its models
//! get. The flags are read from the form's legacy `movement` object.

use serde_json::{Map, Value};

/// Movement keys whose presence alone marks a form as flying.
const FLYING_KEYS: [&str; 2] = ["flyingParameters", "mountedFlyingParameters"];

/// Movement keys whose presence alone marks a form as swimming.
const SWIMMING_KEYS: [&str; 1] = ["swimmingParameters"];

/// Flight and swim capabilities derived from a movement object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    flying: bool,
    swimming: bool,
}

impl Capabilities {
    /// Create capabilities from explicit flags.
    pub fn new(flying: bool, swimming: bool) -> Self {
        Self { flying, swimming }
    }

    /// Detect capabilities from a legacy movement value.
    ///
    /// A form flies when `canFly` is exactly `true` or when any of the flying
    /// parameter blocks is present and non-null. Swimming follows the same
    /// rule with `canSurf` and `swimmingParameters`. Anything other than an
    /// object yields no capabilities.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexmorph_core::capability::Capabilities;
    /// use serde_json::json;
    ///
    /// let caps = Capabilities::from_movement(Some(&json!({"canFly": true})));
    /// assert!(caps.can_fly());
    /// assert!(!caps.can_swim());
    /// ```
    pub fn from_movement(movement: Option<&Value>) -> Self {
        let Some(Value::Object(movement)) = movement else {
            return Self::default();
        };

        Self {
            flying: is_true(movement, "canFly") || has_any(movement, &FLYING_KEYS),
            swimming: is_true(movement, "canSurf") || has_any(movement, &SWIMMING_KEYS),
        }
    }

    /// Returns `true` if fly animations should be emitted.
    pub fn can_fly(&self) -> bool {
        self.flying
    }

    /// Returns `true` if swim animations should be emitted.
    pub fn can_swim(&self) -> bool {
        self.swimming
    }
}

fn is_true(movement: &Map<String, Value>, key: &str) -> bool {
    matches!(movement.get(key), Some(Value::Bool(true)))
}

fn has_any(movement: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter()
        .any(|key| movement.get(*key).is_some_and(|value| !value.is_null()))
}
