//! Asset path derivation.
//!
//! Legacy palettes point at models either through a PQC locator path or only
//! through a texture/sprite hint. Both are mapped onto `.bmd` model paths here.
//! Backslash separators are normalized to forward slashes before any path
//! arithmetic so that Windows-authored documents convert the same way.

/// File extension of converted model and animation files.
pub const MODEL_EXTENSION: &str = "bmd";

/// File stem of a model derived from a texture or sprite hint.
pub const MODEL_FILE_STEM: &str = "model";

/// Replace backslash separators with forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Return the parent directory of a path.
///
/// A bare file name has the parent `"."` and a file directly under the root
/// has the parent `"/"`.
///
/// # Examples
///
/// ```
/// use dexmorph_core::path::parent_dir;
///
/// assert_eq!(parent_dir("a/b/tex.png"), "a/b");
/// assert_eq!(parent_dir("tex.png"), ".");
/// assert_eq!(parent_dir(r"a\b\tex.png"), "a/b");
/// ```
pub fn parent_dir(path: &str) -> String {
    let path = normalize_separators(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { "." } else { "/" }.to_string();
    }

    match trimmed.rfind('/') {
        None => ".".to_string(),
        Some(0) => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
    }
}

/// Swap the extension of a locator path for [`MODEL_EXTENSION`].
///
/// A file name without an extension gets one appended. A leading dot
/// (`.hidden`) does not count as an extension.
///
/// # Examples
///
/// ```
/// use dexmorph_core::path::derive_model_path;
///
/// assert_eq!(derive_model_path("models/eevee/eevee.pqc"), "models/eevee/eevee.bmd");
/// assert_eq!(derive_model_path(r"models\eevee\eevee.pqc"), "models/eevee/eevee.bmd");
/// ```
pub fn derive_model_path(path: &str) -> String {
    let path = normalize_separators(path);
    let path = path.trim_end_matches('/');
    let (dir, name) = match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    };

    let stem = match name.rfind('.') {
        Some(idx) if idx > 0 && idx < name.len() - 1 => &name[..idx],
        _ => name,
    };

    format!("{dir}{stem}.{MODEL_EXTENSION}")
}

/// Derive a model path from a texture or sprite hint.
///
/// Unlike [`derive_model_path`], the hint's own file name is discarded: the
/// model always lives next to the hint as `model.bmd`.
///
/// # Examples
///
/// ```
/// use dexmorph_core::path::derive_model_from_hint;
///
/// assert_eq!(derive_model_from_hint("a/b/tex.png"), "a/b/model.bmd");
/// assert_eq!(derive_model_from_hint("tex.png"), "./model.bmd");
/// ```
pub fn derive_model_from_hint(hint: &str) -> String {
    let dir = parent_dir(hint);
    let dir = dir.trim_end_matches('/');
    format!("{dir}/{MODEL_FILE_STEM}.{MODEL_EXTENSION}")
}
