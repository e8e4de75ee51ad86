//! Palette conversion.

use log::trace;
use serde_json::{Map, Value};

use dexmorph_core::{
    capability::Capabilities,
    model::{ModelEntry, ModelWrapper, has_model_entries, wrap_with_predicate},
    particle::{Particle, particle_from_value},
    path::{derive_model_from_hint, derive_model_path},
    sound::{SoundEntry, convert_sounds},
    source::SourcePalette,
};

/// A converted palette.
///
/// `models` always holds exactly one predicate wrapper, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: Option<Value>,
    sprite: Option<Value>,
    sounds: Vec<SoundEntry>,
    models: Vec<ModelWrapper>,
    particle: Option<Particle>,
    tags: Value,
}

impl Palette {
    /// Get the palette name, if the source had one.
    pub fn name(&self) -> Option<&Value> {
        self.name.as_ref()
    }

    /// Returns `true` if the palette is named exactly `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_ref().and_then(Value::as_str) == Some(name)
    }

    /// Get the sprite copied from the source.
    pub fn sprite(&self) -> Option<&Value> {
        self.sprite.as_ref()
    }

    /// Borrow the converted sounds.
    pub fn sounds(&self) -> &[SoundEntry] {
        &self.sounds
    }

    /// Borrow the model wrappers.
    pub fn models(&self) -> &[ModelWrapper] {
        &self.models
    }

    /// Returns `true` if the palette's wrapper holds at least one model.
    pub fn has_models(&self) -> bool {
        has_model_entries(&self.models)
    }

    /// Replace the model wrappers.
    pub(crate) fn set_models(&mut self, models: Vec<ModelWrapper>) {
        self.models = models;
    }

    /// Get the particle, if the source named one.
    pub fn particle(&self) -> Option<&Particle> {
        self.particle.as_ref()
    }

    /// Get the tags.
    pub fn tags(&self) -> &Value {
        &self.tags
    }
}

impl From<Palette> for Value {
    fn from(palette: Palette) -> Self {
        let mut map = Map::new();
        if let Some(name) = palette.name {
            map.insert("name".to_string(), name);
        }
        if let Some(sprite) = palette.sprite {
            map.insert("sprite".to_string(), sprite);
        }
        if !palette.sounds.is_empty() {
            map.insert(
                "sounds".to_string(),
                Value::Array(palette.sounds.into_iter().map(Value::from).collect()),
            );
        }
        map.insert(
            "models".to_string(),
            Value::Array(palette.models.into_iter().map(Value::from).collect()),
        );
        if let Some(particle) = palette.particle {
            map.insert("particle".to_string(), Value::from(particle));
        }
        map.insert("tags".to_string(), palette.tags);
        Value::Object(map)
    }
}

/// Convert one legacy palette.
///
/// Models come from the locator paths when the palette declares at least
/// one, one entry per path; otherwise a single model is derived from the texture or
/// sprite hint. A palette with neither gets an empty wrapper.
pub fn convert_palette(source: &SourcePalette, capabilities: Capabilities) -> Palette {
    let entry = |model: String| {
        ModelEntry::new(model, source.texture(), source.emissive(), capabilities)
    };

    let entries: Vec<ModelEntry> = match source.model_paths() {
        Some(paths) => paths
            .iter()
            .map(|path| entry(derive_model_path(path)))
            .collect(),
        None => source
            .hint()
            .map(|hint| entry(derive_model_from_hint(hint)))
            .into_iter()
            .collect(),
    };
    trace!(palette:? = source.name(), models = entries.len(); "Palette converted");

    Palette {
        name: source.name().cloned(),
        sprite: source.sprite().cloned(),
        sounds: convert_sounds(source.sounds()),
        models: wrap_with_predicate(entries),
        particle: particle_from_value(source.particle()),
        tags: source
            .tags()
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())),
    }
}
