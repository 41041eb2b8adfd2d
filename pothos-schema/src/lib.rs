//! Prisma schema description for the Pothos CRUD generator.
//!
//! The generator consumes the DMMF document Prisma produces from a
//! `schema.prisma` file. This crate loads that JSON document into typed,
//! read-only structures and answers the few questions the generator asks
//! about it (which input type is the "main" one for a field, which
//! special scalars are referenced).
//!
//! ```ignore
//! use pothos_crud_schema::Document;
//!
//! let document = Document::from_file("prisma/dmmf.json")?;
//! for model in document.models() {
//!     println!("{}", model.name);
//! }
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod analysis;
mod document;
mod error;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use analysis::{SpecialScalar, UsedScalars, main_input};
pub use document::{
    Datamodel, DatamodelEnum, Document, EnumValue, Field, FieldKind, InputField, InputObjectType,
    InputSchema, InputTypeRef, Model, Namespaced, PrimaryKey, SchemaEnum, TypeLocation,
};
pub use error::{Error, Result};
