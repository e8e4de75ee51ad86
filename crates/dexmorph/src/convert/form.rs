//! Form conversion: gender groups, shiny mirroring, and head/tail assembly.

use log::{debug, warn};
use serde_json::{Map, Value};

use dexmorph_core::{
    capability::Capabilities,
    growth::{GROWTH_DATA_KEY, GrowthData},
    model::{ModelEntry, ModelWrapper, wrap_with_predicate},
    normalize::{is_truthy, normalize_form_name},
    ordering::{FORM_HEAD_ORDER, FORM_TAIL_ORDER, SPAWN_ORDER, ordered, ordered_value},
    path::derive_model_from_hint,
    source::{SourceForm, SourceGenderGroup, SourcePalette},
};

use super::palette::{Palette, convert_palette};

/// Name of the default-appearance palette.
pub const BASE_PALETTE: &str = "none";

/// Name of the shiny palette.
pub const SHINY_PALETTE: &str = "shiny";

const NAME: &str = "name";
const SPAWN: &str = "spawn";
const GENDER_PROPERTIES: &str = "genderProperties";

/// A converted gender group.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderGroup {
    gender: Option<Value>,
    palettes: Vec<Palette>,
    tags: Option<Value>,
}

impl GenderGroup {
    /// Get the gender copied from the source.
    pub fn gender(&self) -> Option<&Value> {
        self.gender.as_ref()
    }

    /// Borrow the converted palettes.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Returns `true` if the group has neither a gender nor palettes.
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.palettes.is_empty()
    }
}

impl From<GenderGroup> for Value {
    fn from(group: GenderGroup) -> Self {
        let mut map = Map::new();
        if let Some(gender) = group.gender {
            map.insert("gender".to_string(), gender);
        }
        if !group.palettes.is_empty() {
            map.insert(
                "palettes".to_string(),
                Value::Array(group.palettes.into_iter().map(Value::from).collect()),
            );
        }
        if let Some(tags) = group.tags {
            map.insert("tags".to_string(), tags);
        }
        Value::Object(map)
    }
}

/// Convert one legacy form.
///
/// The form's own movement block decides which animations its models get;
/// when it is missing or empty, `movement_fallback` is used instead.
pub fn convert_form(source: &SourceForm, movement_fallback: Option<&Value>) -> Map<String, Value> {
    let name = normalize_form_name(source.name());
    let movement = source
        .movement()
        .filter(|movement| is_truthy(movement))
        .or(movement_fallback);
    let capabilities = Capabilities::from_movement(movement);
    debug!(
        form:% = name,
        can_fly = capabilities.can_fly(),
        can_swim = capabilities.can_swim();
        "Converting form"
    );

    let mut head = Map::new();
    head.insert(NAME.to_string(), name);
    for key in FORM_HEAD_ORDER {
        if matches!(*key, NAME | GENDER_PROPERTIES) {
            continue;
        }
        if let Some(value) = source.field(key) {
            let value = match *key {
                SPAWN => ordered_value(value.clone(), SPAWN_ORDER),
                _ => value.clone(),
            };
            head.insert((*key).to_string(), value);
        }
    }

    let groups: Vec<Value> = source
        .gender_groups()
        .iter()
        .map(|group| convert_gender_group(group, capabilities))
        .filter(|group| !group.is_empty())
        .map(Value::from)
        .collect();
    if !groups.is_empty() {
        head.insert(GENDER_PROPERTIES.to_string(), Value::Array(groups));
    }

    let mut form = ordered(head, FORM_HEAD_ORDER);
    for key in FORM_TAIL_ORDER {
        if *key == GROWTH_DATA_KEY {
            continue;
        }
        if let Some(value) = source.field(key) {
            form.insert((*key).to_string(), value.clone());
        }
    }
    form.insert(
        GROWTH_DATA_KEY.to_string(),
        Value::from(GrowthData::default()),
    );

    form
}

/// Convert a gender group's palettes, then fill in missing shiny models and
/// any other palette left without a model.
pub fn convert_gender_group(source: &SourceGenderGroup, capabilities: Capabilities) -> GenderGroup {
    let mut palettes: Vec<Palette> = source
        .palettes()
        .iter()
        .map(|palette| convert_palette(palette, capabilities))
        .collect();

    mirror_shiny(&mut palettes, source.palettes(), capabilities);
    fill_missing_models(&mut palettes, source.palettes(), capabilities);

    GenderGroup {
        gender: source.gender().cloned(),
        palettes,
        tags: source.tags().cloned(),
    }
}

/// Give a model-less shiny palette the base palette's models.
///
/// When a base palette with models exists, its entries are copied with the
/// texture swapped for the shiny source's texture or sprite. Without one, a
/// model is derived straight from that hint.
fn mirror_shiny(palettes: &mut [Palette], sources: &[SourcePalette], capabilities: Capabilities) {
    let Some(shiny) = palettes.iter().position(|p| p.is_named(SHINY_PALETTE)) else {
        return;
    };
    if palettes[shiny].has_models() {
        return;
    }

    let shiny_hint = sources.get(shiny).and_then(SourcePalette::hint);
    let base = palettes
        .iter()
        .find(|p| p.is_named(BASE_PALETTE) && p.has_models());

    let mirrored = match base {
        Some(base) => clone_models_for_shiny(base.models(), shiny_hint),
        None => shiny_hint.map(|hint| wrap_with_predicate(vec![model_from_hint(hint, capabilities)])),
    };
    if let Some(models) = mirrored {
        debug!(texture:? = shiny_hint; "Mirrored models onto shiny palette");
        palettes[shiny].set_models(models);
    }
}

/// Derive a model for every palette still without one from its own hint.
///
/// A palette with no texture or sprite keeps its empty wrapper.
fn fill_missing_models(
    palettes: &mut [Palette],
    sources: &[SourcePalette],
    capabilities: Capabilities,
) {
    for (palette, source) in palettes.iter_mut().zip(sources) {
        if palette.has_models() {
            continue;
        }
        match source.hint() {
            Some(hint) => {
                palette.set_models(wrap_with_predicate(vec![model_from_hint(hint, capabilities)]))
            }
            None => {
                warn!(palette:? = palette.name(); "Palette has no model source, leaving its models empty");
                palette.set_models(wrap_with_predicate(Vec::new()));
            }
        }
    }
}

/// A model next to `hint`, textured with the hint itself.
fn model_from_hint(hint: &str, capabilities: Capabilities) -> ModelEntry {
    ModelEntry::new(derive_model_from_hint(hint), Some(hint), None, capabilities)
}

/// Copy the first wrapper's entries with their texture replaced.
///
/// Returns `None` when there is no wrapper or no shiny texture. Each copy is
/// independent; model paths, animations, scale, and emissive are kept as-is.
///
/// # Examples
///
/// ```
/// use dexmorph::convert::clone_models_for_shiny;
/// use dexmorph_core::{capability::Capabilities, model::{ModelEntry, wrap_with_predicate}};
///
/// let base = wrap_with_predicate(vec![ModelEntry::new(
///     "a/model.bmd",
///     Some("a/tex.png"),
///     None,
///     Capabilities::default(),
/// )]);
///
/// let shiny = clone_models_for_shiny(&base, Some("a/shiny.png")).unwrap();
/// assert_eq!(shiny[0].models()[0].texture(), Some("a/shiny.png"));
/// assert!(clone_models_for_shiny(&base, None).is_none());
/// ```
pub fn clone_models_for_shiny(
    base: &[ModelWrapper],
    shiny_texture: Option<&str>,
) -> Option<Vec<ModelWrapper>> {
    let texture = shiny_texture?;
    let wrapper = base.first()?;
    let entries = wrapper
        .models()
        .iter()
        .map(|entry| entry.with_texture(texture))
        .collect();
    Some(wrap_with_predicate(entries))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn form_from(value: Value) -> SourceForm {
        SourceForm::new(value.as_object().unwrap().clone())
    }

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    fn base_palette() -> SourcePalette {
        SourcePalette::new()
            .with_name(json!("none"))
            .with_texture("a/b/tex.png")
            .with_emissive(json!("a/b/glow.png"))
    }

    #[test]
    fn test_form_name_defaults_to_base() {
        let form = convert_form(&SourceForm::default(), None);
        assert_eq!(form[NAME], json!("base"));
        assert_eq!(keys(&form), ["name", "growth_data"]);
    }

    #[test]
    fn test_form_key_order() {
        let source = form_from(json!({
            "evYields": {"hp": 1},
            "types": ["Normal"],
            "spawn": {"spawnLevel": 5, "baseExp": 65},
            "moves": [],
            "name": "Alolan",
            "possibleGenders": ["MALE"],
            "experienceGroup": "MediumFast",
            "eggGroups": ["Field"],
            "unknownKey": true
        }));

        let form = convert_form(&source, None);

        assert_eq!(
            keys(&form),
            [
                "name",
                "experienceGroup",
                "moves",
                "spawn",
                "possibleGenders",
                "eggGroups",
                "types",
                "evYields",
                "growth_data"
            ]
        );
        let spawn: Vec<_> = form["spawn"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(spawn, ["baseExp", "spawnLevel"]);
    }

    #[test]
    fn test_form_growth_data_last() {
        let source = form_from(json!({"growth_data": {"mean": 1.0}, "weight": 6.5}));

        let form = convert_form(&source, None);

        assert_eq!(keys(&form).last(), Some(&"growth_data"));
        assert_eq!(form["growth_data"]["mean"], json!(40.0));
    }

    #[test]
    fn test_form_movement_fallback() {
        let group = SourceGenderGroup::new(vec![base_palette()]);
        let fallback = json!({"canSurf": true});

        let own = form_from(json!({"movement": {"canFly": true}})).with_gender_groups(vec![group.clone()]);
        let empty = form_from(json!({"movement": {}})).with_gender_groups(vec![group.clone()]);
        let missing = SourceForm::default().with_gender_groups(vec![group]);

        let anim_types = |form: Map<String, Value>| -> Vec<Value> {
            form[GENDER_PROPERTIES][0]["palettes"][0]["models"][0]["models"][0]["animations"]
                .as_array()
                .unwrap()
                .iter()
                .map(|anim| anim["type"].clone())
                .collect()
        };

        assert_eq!(
            anim_types(convert_form(&own, Some(&fallback))),
            [json!("idle"), json!("walk"), json!("fly")]
        );
        assert_eq!(
            anim_types(convert_form(&empty, Some(&fallback))),
            [json!("idle"), json!("walk"), json!("swim")]
        );
        assert_eq!(
            anim_types(convert_form(&missing, None)),
            [json!("idle"), json!("walk")]
        );
    }

    #[test]
    fn test_empty_gender_groups_dropped() {
        let source = SourceForm::default().with_gender_groups(vec![
            SourceGenderGroup::new(Vec::new()).with_tags(json!(["x"])),
            SourceGenderGroup::new(Vec::new()).with_gender(json!("female")),
        ]);

        let form = convert_form(&source, None);

        assert_eq!(form[GENDER_PROPERTIES], json!([{"gender": "female"}]));
    }

    #[test]
    fn test_no_gender_groups_omits_key() {
        let source = SourceForm::default().with_gender_groups(vec![SourceGenderGroup::default()]);

        assert!(convert_form(&source, None).get(GENDER_PROPERTIES).is_none());
    }

    #[test]
    fn test_gender_group_key_order() {
        let group = SourceGenderGroup::new(vec![base_palette()])
            .with_tags(json!(["t"]))
            .with_gender(json!("male"));

        let value = Value::from(convert_gender_group(&group, Capabilities::default()));
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();

        assert_eq!(keys, ["gender", "palettes", "tags"]);
    }

    /// Convert `sources`, then clear the models of the palettes at `cleared`.
    fn converted_without_models(sources: &[SourcePalette], cleared: &[usize]) -> Vec<Palette> {
        let mut palettes: Vec<Palette> = sources
            .iter()
            .map(|source| convert_palette(source, Capabilities::default()))
            .collect();
        for &index in cleared {
            palettes[index].set_models(wrap_with_predicate(Vec::new()));
        }
        palettes
    }

    #[test]
    fn test_shiny_empty_locator_uses_own_hint() {
        let base = SourcePalette::new()
            .with_name(json!("none"))
            .with_model_paths(vec!["m/a.pqc".to_string()]);
        let shiny = SourcePalette::new()
            .with_name(json!("shiny"))
            .with_texture("s/shiny.png")
            .with_model_paths(Vec::new());
        let group = SourceGenderGroup::new(vec![base, shiny]);

        let converted = convert_gender_group(&group, Capabilities::default());
        let entry = &converted.palettes()[1].models()[0].models()[0];

        assert_eq!(entry.model(), "s/model.bmd");
        assert_eq!(entry.texture(), Some("s/shiny.png"));
    }

    #[test]
    fn test_mirror_shiny_copies_base_models() {
        let shiny = SourcePalette::new()
            .with_name(json!("shiny"))
            .with_texture("a/b/shiny.png");
        let sources = [base_palette(), shiny];
        let mut palettes = converted_without_models(&sources, &[1]);

        mirror_shiny(&mut palettes, &sources, Capabilities::new(true, false));
        let base = &palettes[0].models()[0].models()[0];
        let mirrored = &palettes[1].models()[0].models()[0];

        assert_eq!(mirrored.texture(), Some("a/b/shiny.png"));
        assert_eq!(mirrored.model(), base.model());
        assert_eq!(mirrored.animations(), base.animations());
        assert_eq!(mirrored.emissive(), base.emissive());
        assert_eq!(base.texture(), Some("a/b/tex.png"));
    }

    #[test]
    fn test_mirror_shiny_copies_every_base_entry() {
        let base = SourcePalette::new()
            .with_name(json!("none"))
            .with_model_paths(vec!["m/a.pqc".to_string(), "m/b.pqc".to_string()]);
        let shiny = SourcePalette::new()
            .with_name(json!("shiny"))
            .with_sprite(json!("m/shiny.png"));
        let sources = [shiny, base];
        let mut palettes = converted_without_models(&sources, &[0]);

        mirror_shiny(&mut palettes, &sources, Capabilities::default());
        let entries = palettes[0].models()[0].models();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].model(), "m/a.bmd");
        assert_eq!(entries[1].model(), "m/b.bmd");
        assert!(entries.iter().all(|e| e.texture() == Some("m/shiny.png")));
    }

    #[test]
    fn test_mirror_shiny_without_base_derives_from_hint() {
        let shiny = SourcePalette::new()
            .with_name(json!("shiny"))
            .with_texture("s/shiny.png")
            .with_emissive(json!("s/glow.png"));
        let sources = [shiny];
        let mut palettes = converted_without_models(&sources, &[0]);

        mirror_shiny(&mut palettes, &sources, Capabilities::default());
        let entry = &palettes[0].models()[0].models()[0];

        assert_eq!(entry.model(), "s/model.bmd");
        assert_eq!(entry.texture(), Some("s/shiny.png"));
        assert!(entry.emissive().is_none());
    }

    #[test]
    fn test_shiny_with_own_models_untouched() {
        let shiny = SourcePalette::new()
            .with_name(json!("shiny"))
            .with_texture("s/shiny.png");
        let group = SourceGenderGroup::new(vec![base_palette(), shiny]);

        let converted = convert_gender_group(&group, Capabilities::default());
        let entry = &converted.palettes()[1].models()[0].models()[0];

        assert_eq!(entry.model(), "s/model.bmd");
        assert!(entry.emissive().is_none());
    }

    #[test]
    fn test_empty_locator_keeps_texture_and_emissive() {
        let palette = SourcePalette::new()
            .with_name(json!("galaxy"))
            .with_sprite(json!("g/s.png"))
            .with_emissive(json!("g/glow.png"))
            .with_model_paths(Vec::new());
        let group = SourceGenderGroup::new(vec![palette]);

        let converted = convert_gender_group(&group, Capabilities::default());
        let entry = &converted.palettes()[0].models()[0].models()[0];

        assert_eq!(entry.model(), "g/model.bmd");
        assert!(entry.texture().is_none());
        assert_eq!(entry.emissive(), Some(&json!("g/glow.png")));
    }

    #[test]
    fn test_fill_missing_models_from_hint() {
        let sources = [SourcePalette::new()
            .with_name(json!("galaxy"))
            .with_sprite(json!("g/sprite.png"))];
        let mut palettes = converted_without_models(&sources, &[0]);

        fill_missing_models(&mut palettes, &sources, Capabilities::default());
        let entry = &palettes[0].models()[0].models()[0];

        assert_eq!(entry.model(), "g/model.bmd");
        assert_eq!(entry.texture(), Some("g/sprite.png"));
    }

    #[test]
    fn test_palette_without_any_source_keeps_empty_wrapper() {
        let group = SourceGenderGroup::new(vec![
            SourcePalette::new().with_name(json!("shiny")),
            SourcePalette::new().with_name(json!("none")),
        ]);

        let converted = convert_gender_group(&group, Capabilities::default());

        for palette in converted.palettes() {
            assert_eq!(palette.models().len(), 1);
            assert!(!palette.has_models());
        }
    }

    #[test]
    fn test_clone_models_for_shiny_empty_base() {
        assert!(clone_models_for_shiny(&[], Some("x.png")).is_none());

        let cloned = clone_models_for_shiny(&wrap_with_predicate(Vec::new()), Some("x.png")).unwrap();
        assert!(cloned[0].models().is_empty());
    }
}
