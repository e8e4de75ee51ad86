//! Document conversion.

use log::info;
use serde_json::{Map, Value};

use dexmorph_core::{
    normalize::normalize_form_name,
    ordering::{TOP_ORDER, ordered},
    source::{SourceDocument, SourceForm},
};

use super::form::convert_form;

/// Convert a whole legacy document.
///
/// `defaultForms` is always a single name: the declared default when it is a
/// non-blank string, otherwise the first form's normalized name. The first
/// form's movement block, when it is an object, is the movement fallback for
/// every form.
pub fn convert_document(source: &SourceDocument) -> Value {
    let forms = source.forms();

    let default_form = match source.default_form() {
        Some(default_form) => Value::String(default_form.to_string()),
        None => normalize_form_name(forms.first().and_then(SourceForm::name)),
    };
    let movement_fallback = forms
        .first()
        .and_then(SourceForm::movement)
        .filter(|movement| movement.is_object());

    let converted: Vec<Value> = forms
        .iter()
        .map(|form| Value::Object(convert_form(form, movement_fallback)))
        .collect();
    info!(name:? = source.name(), forms = converted.len(); "Document converted");

    let mut document = Map::new();
    if let Some(name) = source.name() {
        document.insert("name".to_string(), name.clone());
    }
    if let Some(dex) = source.dex() {
        document.insert("dex".to_string(), dex.clone());
    }
    document.insert(
        "defaultForms".to_string(),
        Value::Array(vec![default_form]),
    );
    document.insert("forms".to_string(), Value::Array(converted));
    if let Some(generation) = source.generation() {
        document.insert("generation".to_string(), generation.clone());
    }

    Value::Object(ordered(document, TOP_ORDER))
}
