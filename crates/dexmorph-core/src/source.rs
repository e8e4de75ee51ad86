//! Typed view of a legacy species document.
//!
//! The converters never index into raw JSON for structure. `dexmorph-parser`
//! checks the shape of a document once and hands over these types; fields
//! that are only copied through stay as [`Value`]s.
//!
//! # Overview
//!
//! - [`SourceDocument`]: Top-level name, dex, default form, and forms
//! - [`SourceForm`]: Pass-through form fields plus its gender groups
//! - [`SourceGenderGroup`]: A gender and the palettes that apply to it
//! - [`SourcePalette`]: One appearance variant with its model hints

use serde_json::{Map, Value};

use crate::normalize::present_str;

/// A legacy document after shape checking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceDocument {
    name: Option<Value>,
    dex: Option<Value>,
    default_form: Option<String>,
    forms: Vec<SourceForm>,
    generation: Option<Value>,
}

impl SourceDocument {
    /// Create a document holding the given forms.
    pub fn new(forms: Vec<SourceForm>) -> Self {
        Self {
            forms,
            ..Self::default()
        }
    }

    /// Set the species name, copied through as-is.
    pub fn with_name(mut self, name: Value) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the national dex number, copied through as-is.
    pub fn with_dex(mut self, dex: Value) -> Self {
        self.dex = Some(dex);
        self
    }

    /// Set the declared default form.
    pub fn with_default_form(mut self, default_form: impl Into<String>) -> Self {
        self.default_form = Some(default_form.into());
        self
    }

    /// Set the generation, copied through as-is.
    pub fn with_generation(mut self, generation: Value) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Get the species name, if the key was present.
    pub fn name(&self) -> Option<&Value> {
        self.name.as_ref()
    }

    /// Get the dex number, if the key was present.
    pub fn dex(&self) -> Option<&Value> {
        self.dex.as_ref()
    }

    /// Get the declared default form, if it was a non-blank string.
    pub fn default_form(&self) -> Option<&str> {
        self.default_form.as_deref()
    }

    /// Borrow the forms in document order.
    pub fn forms(&self) -> &[SourceForm] {
        &self.forms
    }

    /// Get the generation, if the key was present.
    pub fn generation(&self) -> Option<&Value> {
        self.generation.as_ref()
    }
}

/// A legacy form.
///
/// Every key other than `genderProperties` is kept in `fields` and looked up
/// by name when the output form is assembled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceForm {
    fields: Map<String, Value>,
    gender_groups: Vec<SourceGenderGroup>,
}

impl SourceForm {
    /// Create a form from its pass-through fields.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            gender_groups: Vec::new(),
        }
    }

    /// Set the gender groups.
    pub fn with_gender_groups(mut self, gender_groups: Vec<SourceGenderGroup>) -> Self {
        self.gender_groups = gender_groups;
        self
    }

    /// Get a pass-through field by key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get the raw form name.
    pub fn name(&self) -> Option<&Value> {
        self.field("name")
    }

    /// Get the raw movement block.
    pub fn movement(&self) -> Option<&Value> {
        self.field("movement")
    }

    /// Borrow the gender groups in source order.
    pub fn gender_groups(&self) -> &[SourceGenderGroup] {
        &self.gender_groups
    }
}

/// Palettes grouped under a gender.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceGenderGroup {
    gender: Option<Value>,
    palettes: Vec<SourcePalette>,
    tags: Option<Value>,
}

impl SourceGenderGroup {
    /// Create a gender group holding the given palettes.
    pub fn new(palettes: Vec<SourcePalette>) -> Self {
        Self {
            palettes,
            ..Self::default()
        }
    }

    /// Set the gender, copied through as-is.
    pub fn with_gender(mut self, gender: Value) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the tags, copied through as-is.
    pub fn with_tags(mut self, tags: Value) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Get the gender, if the key was present.
    pub fn gender(&self) -> Option<&Value> {
        self.gender.as_ref()
    }

    /// Borrow the palettes in source order.
    pub fn palettes(&self) -> &[SourcePalette] {
        &self.palettes
    }

    /// Get the tags, if the key was present.
    pub fn tags(&self) -> Option<&Value> {
        self.tags.as_ref()
    }
}

/// A legacy palette.
///
/// `texture` and `sprite` are kept twice: `sprite` as the raw value copied to
/// the output, and both as optional strings used as model path hints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcePalette {
    name: Option<Value>,
    sprite: Option<Value>,
    texture: Option<String>,
    sprite_hint: Option<String>,
    sounds: Option<Value>,
    emissive: Option<Value>,
    model_paths: Option<Vec<String>>,
    particle: Option<Value>,
    tags: Option<Value>,
}

impl SourcePalette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palette name.
    pub fn with_name(mut self, name: Value) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the sprite. A non-blank string sprite also becomes a path hint.
    pub fn with_sprite(mut self, sprite: Value) -> Self {
        self.sprite_hint = present_str(Some(&sprite)).map(str::to_string);
        self.sprite = Some(sprite);
        self
    }

    /// Set the texture path. Blank textures are ignored.
    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        let texture = texture.into();
        self.texture = (!texture.trim().is_empty()).then_some(texture);
        self
    }

    /// Set the raw sound list.
    pub fn with_sounds(mut self, sounds: Value) -> Self {
        self.sounds = Some(sounds);
        self
    }

    /// Set the raw emissive value.
    pub fn with_emissive(mut self, emissive: Value) -> Self {
        self.emissive = Some(emissive);
        self
    }

    /// Set the locator model paths, still carrying their source extension.
    pub fn with_model_paths(mut self, model_paths: Vec<String>) -> Self {
        self.model_paths = Some(model_paths);
        self
    }

    /// Set the raw particle field.
    pub fn with_particle(mut self, particle: Value) -> Self {
        self.particle = Some(particle);
        self
    }

    /// Set the tags, copied through as-is.
    pub fn with_tags(mut self, tags: Value) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Get the palette name, if the key was present.
    pub fn name(&self) -> Option<&Value> {
        self.name.as_ref()
    }

    /// Returns `true` if the palette is named exactly `name`.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_ref().and_then(Value::as_str) == Some(name)
    }

    /// Get the raw sprite, if the key was present.
    pub fn sprite(&self) -> Option<&Value> {
        self.sprite.as_ref()
    }

    /// Get the texture path, if any.
    pub fn texture(&self) -> Option<&str> {
        self.texture.as_deref()
    }

    /// Get the path hint used to derive a model: texture first, then sprite.
    pub fn hint(&self) -> Option<&str> {
        self.texture.as_deref().or(self.sprite_hint.as_deref())
    }

    /// Get the raw sound list.
    pub fn sounds(&self) -> Option<&Value> {
        self.sounds.as_ref()
    }

    /// Get the raw emissive value.
    pub fn emissive(&self) -> Option<&Value> {
        self.emissive.as_ref()
    }

    /// Get the locator model paths.
    ///
    /// An empty path list counts as no locator.
    pub fn model_paths(&self) -> Option<&[String]> {
        self.model_paths
            .as_deref()
            .filter(|paths| !paths.is_empty())
    }

    /// Get the raw particle field.
    pub fn particle(&self) -> Option<&Value> {
        self.particle.as_ref()
    }

    /// Get the tags, if present.
    pub fn tags(&self) -> Option<&Value> {
        self.tags.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_palette_hint_prefers_texture() {
        let palette = SourcePalette::new()
            .with_texture("a/tex.png")
            .with_sprite(json!("a/sprite.png"));
        assert_eq!(palette.hint(), Some("a/tex.png"));
    }

    #[test]
    fn test_palette_hint_falls_back_to_sprite() {
        let palette = SourcePalette::new()
            .with_texture("  ")
            .with_sprite(json!("a/sprite.png"));
        assert_eq!(palette.texture(), None);
        assert_eq!(palette.hint(), Some("a/sprite.png"));
    }

    #[test]
    fn test_palette_without_hints() {
        let palette = SourcePalette::new().with_sprite(Value::Null);
        assert_eq!(palette.sprite(), Some(&Value::Null));
        assert_eq!(palette.hint(), None);
    }

    #[test]
    fn test_empty_model_paths_are_no_locator() {
        let palette = SourcePalette::new().with_model_paths(Vec::new());
        assert!(palette.model_paths().is_none());

        let palette = SourcePalette::new().with_model_paths(vec!["a.pqc".to_string()]);
        assert_eq!(palette.model_paths(), Some(&["a.pqc".to_string()][..]));
    }

    #[test]
    fn test_palette_is_named() {
        let palette = SourcePalette::new().with_name(json!("shiny"));
        assert!(palette.is_named("shiny"));
        assert!(!palette.is_named("none"));
        assert!(!SourcePalette::new().with_name(json!(1)).is_named("1"));
    }

    #[test]
    fn test_form_field_lookup() {
        let fields = json!({"name": "Alolan", "movement": {"canFly": true}});
        let form = SourceForm::new(fields.as_object().unwrap().clone());
        assert_eq!(form.name(), Some(&json!("Alolan")));
        assert_eq!(form.movement(), Some(&json!({"canFly": true})));
        assert!(form.field("spawn").is_none());
        assert!(form.gender_groups().is_empty());
    }

    #[test]
    fn test_document_builder() {
        let doc = SourceDocument::new(vec![SourceForm::default()])
            .with_name(json!("Eevee"))
            .with_dex(json!(133))
            .with_default_form("base");
        assert_eq!(doc.name(), Some(&json!("Eevee")));
        assert_eq!(doc.default_form(), Some("base"));
        assert_eq!(doc.forms().len(), 1);
        assert!(doc.generation().is_none());
    }
}
