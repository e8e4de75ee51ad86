//! The conversion pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse (dexmorph-parser)
//! SourceDocument
//!     ↓ convert (this module)
//! Document tree
//!     ↓ export
//! Output Text
//! ```
//!
//! Data flows strictly downward: [`convert_document`] converts each form with
//! [`convert_form`], which converts each palette with [`convert_palette`].
//! Every function here is total; malformed input is rejected by the parser
//! before it gets this far.

mod document;
mod form;
mod palette;

pub use document::convert_document;
pub use form::{
    BASE_PALETTE, GenderGroup, SHINY_PALETTE, clone_models_for_shiny, convert_form,
    convert_gender_group,
};
pub use palette::{Palette, convert_palette};
