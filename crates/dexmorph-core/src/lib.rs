//! Dexmorph Core Types and Definitions
//!
//! This crate provides the foundational types and the leaf-level rules used to
//! rewrite a legacy species document into the current schema. It includes:
//!
//! - **Normalizers**: Namespace qualification and form-name defaults ([`normalize`] module)
//! - **Paths**: Model path derivation from locator paths and texture hints ([`path`] module)
//! - **Capabilities**: Flight and swim detection from movement data ([`capability::Capabilities`])
//! - **Sounds and particles**: Palette sound lists and the shiny particle ([`sound`], [`particle`])
//! - **Models**: Model entries, animation lists, and predicate wrappers ([`model`] module)
//! - **Growth data**: The synthesized per-form scaling block ([`growth::GrowthData`])
//! - **Ordering**: Declarative key-order tables and the reordering routine ([`ordering`] module)
//! - **Source**: The typed view of a legacy document the converters consume ([`source`] module)
//!
//! Every function here is total: given well-typed input it never fails. Shape
//! checks happen earlier, in `dexmorph-parser`.

pub mod capability;
pub mod growth;
pub mod model;
pub mod normalize;
pub mod ordering;
pub mod particle;
pub mod path;
pub mod sound;
pub mod source;
