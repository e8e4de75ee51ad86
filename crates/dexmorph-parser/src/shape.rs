//! Shape check: from a JSON tree to the typed source model.
//!
//! Legacy documents are loosely typed. Missing and `null` containers mean
//! "empty" and are accepted; a container of the wrong kind cannot be
//! converted and is reported. Every problem in the document is collected
//! before failing, each with the path of the offending value.

use log::{debug, trace};
use serde_json::{Map, Value};

use dexmorph_core::{
    normalize::present_str,
    source::{SourceDocument, SourceForm, SourceGenderGroup, SourcePalette},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    json_path::JsonPath,
};

const GENDER_PROPERTIES: &str = "genderProperties";

/// Check the shape of a parsed document and build its typed model.
pub(crate) fn shape_document(value: &Value) -> Result<SourceDocument, ParseError> {
    let mut checker = ShapeChecker::default();
    let document = checker.document(value);
    checker.diagnostics.finish(document)
}

/// Describe a value's JSON type for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Default)]
struct ShapeChecker {
    diagnostics: DiagnosticCollector,
}

impl ShapeChecker {
    fn document(&mut self, value: &Value) -> SourceDocument {
        let root = JsonPath::root();
        let Some(object) = value.as_object() else {
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "document root must be an object, found {}",
                    kind_of(value)
                ))
                .with_code(ErrorCode::E200)
                .with_path(root)
                .with_help("a species document is a single `{...}` object"),
            );
            return SourceDocument::default();
        };

        let forms = self.forms(object.get("forms"), &root.key("forms"));
        debug!(forms = forms.len(); "Document shape checked");

        let mut document = SourceDocument::new(forms);
        if let Some(name) = object.get("name") {
            document = document.with_name(name.clone());
        }
        if let Some(dex) = object.get("dex") {
            document = document.with_dex(dex.clone());
        }
        if let Some(default_form) = first_default_form(object) {
            document = document.with_default_form(default_form);
        }
        if let Some(generation) = object.get("generation") {
            document = document.with_generation(generation.clone());
        }
        document
    }

    fn forms(&mut self, value: Option<&Value>, path: &JsonPath) -> Vec<SourceForm> {
        match value {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(forms)) => forms
                .iter()
                .enumerate()
                .filter_map(|(index, form)| self.form(form, &path.index(index)))
                .collect(),
            Some(other) => {
                self.diagnostics.emit(
                    Diagnostic::error(format!(
                        "`forms` must be an array, found {}",
                        kind_of(other)
                    ))
                    .with_code(ErrorCode::E201)
                    .with_path(path.clone())
                    .with_help("list the forms as `[{...}, {...}]`"),
                );
                Vec::new()
            }
        }
    }

    fn form(&mut self, value: &Value, path: &JsonPath) -> Option<SourceForm> {
        let Some(object) = value.as_object() else {
            self.diagnostics.emit(
                Diagnostic::error(format!("form must be an object, found {}", kind_of(value)))
                    .with_code(ErrorCode::E202)
                    .with_path(path.clone()),
            );
            return None;
        };

        let fields: Map<String, Value> = object
            .iter()
            .filter(|(key, _)| key.as_str() != GENDER_PROPERTIES)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        // A non-array `genderProperties` carries nothing convertible.
        let groups_path = path.key(GENDER_PROPERTIES);
        let gender_groups = match object.get(GENDER_PROPERTIES) {
            Some(Value::Array(groups)) => groups
                .iter()
                .enumerate()
                .filter_map(|(index, group)| self.gender_group(group, &groups_path.index(index)))
                .collect(),
            _ => Vec::new(),
        };

        Some(SourceForm::new(fields).with_gender_groups(gender_groups))
    }

    fn gender_group(&mut self, value: &Value, path: &JsonPath) -> Option<SourceGenderGroup> {
        let Some(object) = value.as_object() else {
            trace!(path:% = path; "Skipping non-object gender group");
            return None;
        };

        let palettes_path = path.key("palettes");
        let palettes = match object.get("palettes") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(palettes)) => palettes
                .iter()
                .enumerate()
                .filter_map(|(index, palette)| self.palette(palette, &palettes_path.index(index)))
                .collect(),
            Some(other) => {
                self.diagnostics.emit(
                    Diagnostic::error(format!(
                        "`palettes` must be an array, found {}",
                        kind_of(other)
                    ))
                    .with_code(ErrorCode::E203)
                    .with_path(palettes_path)
                    .with_help("list the palettes as `[{...}, {...}]`"),
                );
                Vec::new()
            }
        };

        let mut group = SourceGenderGroup::new(palettes);
        if let Some(gender) = object.get("gender") {
            group = group.with_gender(gender.clone());
        }
        if let Some(tags) = object.get("tags") {
            group = group.with_tags(tags.clone());
        }
        Some(group)
    }

    fn palette(&mut self, value: &Value, path: &JsonPath) -> Option<SourcePalette> {
        let Some(object) = value.as_object() else {
            self.diagnostics.emit(
                Diagnostic::error(format!(
                    "palette must be an object, found {}",
                    kind_of(value)
                ))
                .with_code(ErrorCode::E204)
                .with_path(path.clone()),
            );
            return None;
        };

        let mut palette = SourcePalette::new();
        if let Some(name) = object.get("name") {
            palette = palette.with_name(name.clone());
        }
        if let Some(sprite) = object.get("sprite") {
            self.check_hint(sprite, &path.key("sprite"));
            palette = palette.with_sprite(sprite.clone());
        }
        if let Some(texture) = object.get("texture") {
            self.check_hint(texture, &path.key("texture"));
            if let Some(texture) = texture.as_str() {
                palette = palette.with_texture(texture);
            }
        }
        if let Some(sounds) = object.get("sounds") {
            palette = palette.with_sounds(sounds.clone());
        }
        if let Some(emissive) = object.get("emissive") {
            palette = palette.with_emissive(emissive.clone());
        }
        if let Some(model_paths) =
            self.model_paths(object.get("modelLocator"), &path.key("modelLocator"))
        {
            palette = palette.with_model_paths(model_paths);
        }
        if let Some(particle) = object.get("particle") {
            palette = palette.with_particle(particle.clone());
        }
        if let Some(tags) = object.get("tags").filter(|tags| !tags.is_null()) {
            palette = palette.with_tags(tags.clone());
        }
        Some(palette)
    }

    /// Read `modelLocator.pqc` as a list of paths.
    ///
    /// Returns `None` when no non-blank locator path is declared. A single
    /// string is a one-path list; blank paths are dropped.
    fn model_paths(&mut self, locator: Option<&Value>, path: &JsonPath) -> Option<Vec<String>> {
        let Some(Value::Object(locator)) = locator else {
            return None;
        };

        let pqc_path = path.key("pqc");
        let paths: Vec<String> = match locator.get("pqc") {
            Some(Value::String(model)) => non_blank(model).into_iter().collect(),
            Some(Value::Array(models)) => models
                .iter()
                .enumerate()
                .filter_map(|(index, model)| match model {
                    Value::String(model) => non_blank(model),
                    other => {
                        self.diagnostics.emit(
                            Diagnostic::error(format!(
                                "model locator path must be a string, found {}",
                                kind_of(other)
                            ))
                            .with_code(ErrorCode::E205)
                            .with_path(pqc_path.index(index)),
                        );
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };
        (!paths.is_empty()).then_some(paths)
    }

    fn check_hint(&mut self, value: &Value, path: &JsonPath) {
        if value.is_string() || value.is_null() {
            return;
        }
        self.diagnostics.emit(
            Diagnostic::error(format!(
                "texture and sprite paths must be strings, found {}",
                kind_of(value)
            ))
            .with_code(ErrorCode::E206)
            .with_path(path.clone())
            .with_help("model paths are derived from this value"),
        );
    }
}

/// The first entry of `defaultForms`, if it is a non-blank string.
fn first_default_form(object: &Map<String, Value>) -> Option<&str> {
    let first = object.get("defaultForms")?.as_array()?.first();
    present_str(first)
}

fn non_blank(path: &str) -> Option<String> {
    (!path.trim().is_empty()).then(|| path.to_string())
}
