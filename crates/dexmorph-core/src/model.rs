//! Model entries, animation lists, and predicate wrappers.
//!
//! # Overview
//!
//! - [`AnimationKind`] / [`Animation`]: A typed animation clip reference.
//! - [`build_animation_list`]: Idle and walk clips, plus fly/swim when the
//!   form's [`Capabilities`] ask for them.
//! - [`ModelEntry`]: One renderable model with texture, clips, and scale.
//! - [`ModelWrapper`]: The always-apply predicate envelope around entries.
//!
//! Every palette's `models` field is a one-element list holding a single
//! [`ModelWrapper`], even when it wraps no entries.

use std::fmt;

use indexmap::IndexSet;
use serde_json::{Map, Value, json};

use crate::{
    capability::Capabilities,
    normalize::{is_truthy, present},
    path::{MODEL_EXTENSION, parent_dir},
};

/// Predicate type that applies a wrapper unconditionally.
pub const ALWAYS_PREDICATE: &str = "pixelmon:always";

/// Render scale of every converted model.
pub const DEFAULT_SCALE: f64 = 1.0;

/// The animation slots a converted model can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Idle,
    Walk,
    Fly,
    Swim,
}

impl AnimationKind {
    /// Returns the schema name of this slot, also used as the clip file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::Idle => "idle",
            AnimationKind::Walk => "walk",
            AnimationKind::Fly => "fly",
            AnimationKind::Swim => "swim",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single animation clip bound to a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Animation {
    kind: AnimationKind,
    path: String,
}

impl Animation {
    /// Create an animation clip for the given slot.
    pub fn new(kind: AnimationKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Create the clip for `kind` stored in `dir` as `<dir>/<kind>.bmd`.
    pub fn in_dir(kind: AnimationKind, dir: &str) -> Self {
        Self::new(kind, format!("{dir}/{}.{MODEL_EXTENSION}", kind.as_str()))
    }

    /// Get the animation slot.
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// Get the clip path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl From<Animation> for Value {
    fn from(animation: Animation) -> Self {
        json!({"type": animation.kind.as_str(), "animation": animation.path})
    }
}

/// Build the animation list for a model.
///
/// Clips live next to the model. Idle and walk are always present; fly and
/// swim follow `capabilities`. Entries are deduplicated on the `(slot, path)`
/// pair, keeping the first occurrence.
///
/// # Examples
///
/// ```
/// use dexmorph_core::{capability::Capabilities, model::build_animation_list};
///
/// let anims = build_animation_list("a/b/model.bmd", Capabilities::new(true, false));
/// let paths: Vec<_> = anims.iter().map(|a| a.path()).collect();
/// assert_eq!(paths, ["a/b/idle.bmd", "a/b/walk.bmd", "a/b/fly.bmd"]);
/// ```
pub fn build_animation_list(model_path: &str, capabilities: Capabilities) -> Vec<Animation> {
    let dir = parent_dir(model_path);

    let mut kinds = vec![AnimationKind::Idle, AnimationKind::Walk];
    if capabilities.can_fly() {
        kinds.push(AnimationKind::Fly);
    }
    if capabilities.can_swim() {
        kinds.push(AnimationKind::Swim);
    }

    dedup_animations(kinds.into_iter().map(|kind| Animation::in_dir(kind, &dir)))
}

/// Deduplicate clips on `(slot, path)`, preserving first-seen order.
fn dedup_animations(animations: impl IntoIterator<Item = Animation>) -> Vec<Animation> {
    animations
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// One renderable model in a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEntry {
    texture: Option<String>,
    model: String,
    animations: Vec<Animation>,
    scale: f64,
    emissive: Option<Value>,
}

impl ModelEntry {
    /// Create a model entry with its animation list.
    ///
    /// Blank textures are omitted from the entry, as are emissive values that
    /// are falsy (`null`, `false`, `0`, or an empty string, list, or object)
    /// or blank strings.
    pub fn new(
        model: impl Into<String>,
        texture: Option<&str>,
        emissive: Option<&Value>,
        capabilities: Capabilities,
    ) -> Self {
        let model = model.into();
        let animations = build_animation_list(&model, capabilities);

        Self {
            texture: texture
                .filter(|texture| !texture.trim().is_empty())
                .map(str::to_string),
            model,
            animations,
            scale: DEFAULT_SCALE,
            emissive: present(emissive.filter(|value| is_truthy(value))).cloned(),
        }
    }

    /// Return an independent copy of this entry with its texture replaced.
    ///
    /// The model path, animations, scale, and emissive value are copied as-is;
    /// animations are not recomputed for the new texture.
    pub fn with_texture(&self, texture: impl Into<String>) -> Self {
        Self {
            texture: Some(texture.into()),
            ..self.clone()
        }
    }

    /// Get the texture path, if any.
    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    /// Get the model path.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Borrow the animation clips.
    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Get the render scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Get the emissive value, if any.
    pub fn emissive(&self) -> Option<&Value> {
        self.emissive.as_ref()
    }
}

impl From<ModelEntry> for Value {
    fn from(entry: ModelEntry) -> Self {
        let mut map = Map::new();
        if let Some(texture) = entry.texture {
            map.insert("texture".to_string(), Value::String(texture));
        }
        map.insert("model".to_string(), Value::String(entry.model));
        map.insert(
            "animations".to_string(),
            Value::Array(entry.animations.into_iter().map(Value::from).collect()),
        );
        map.insert("scale".to_string(), Value::from(entry.scale));
        if let Some(emissive) = entry.emissive {
            map.insert("emissive".to_string(), emissive);
        }
        Value::Object(map)
    }
}

/// A predicate envelope around a list of model entries.
///
/// The predicate is always [`ALWAYS_PREDICATE`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelWrapper {
    models: Vec<ModelEntry>,
}

impl ModelWrapper {
    /// Wrap a list of entries.
    pub fn new(models: Vec<ModelEntry>) -> Self {
        Self { models }
    }

    /// Get the predicate type.
    pub fn predicate(&self) -> &'static str {
        ALWAYS_PREDICATE
    }

    /// Borrow the wrapped entries.
    pub fn models(&self) -> &[ModelEntry] {
        &self.models
    }
}

impl From<ModelWrapper> for Value {
    fn from(wrapper: ModelWrapper) -> Self {
        let mut map = Map::new();
        map.insert(
            "model_predicate".to_string(),
            json!({"type": ALWAYS_PREDICATE}),
        );
        map.insert(
            "models".to_string(),
            Value::Array(wrapper.models.into_iter().map(Value::from).collect()),
        );
        Value::Object(map)
    }
}

/// Wrap entries in the single always-apply envelope a palette carries.
pub fn wrap_with_predicate(entries: Vec<ModelEntry>) -> Vec<ModelWrapper> {
    vec![ModelWrapper::new(entries)]
}

/// Returns `true` if the first envelope wraps at least one entry.
pub fn has_model_entries(wrappers: &[ModelWrapper]) -> bool {
    wrappers
        .first()
        .is_some_and(|wrapper| !wrapper.models().is_empty())
}
