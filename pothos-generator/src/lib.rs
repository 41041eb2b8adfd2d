//! TypeScript emitter for the Pothos CRUD generator.
//!
//! Turns a Prisma schema description into source files for the
//! [Pothos](https://pothos-graphql.dev/) schema builder and its Prisma plugin.
//!
//! # Usage
//!
//! This crate is used internally by the `pothos-crud` CLI. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use pothos_crud_codegen::{language::LanguageCodegen, pipeline::Pipeline};
//! use pothos_crud_generator::Generator;
//!
//! let ctx = Pipeline::new().run(document, config)?;
//! let generator = Generator::from_context(&ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("generated"))?;
//! ```
//!
//! # Generated Output
//!
//! - `{Model}/object.base.ts` - the Prisma object definition
//! - `{Model}/queries/*.base.ts`, `{Model}/mutations/*.base.ts` - one resolver per operation
//! - `{Model}/index.ts`, `{Model}/{queries,mutations}/index.ts` - barrels
//! - `utils.ts`, `objects.ts`, `autocrud.ts` - shared helpers and runtime registration
//! - `inputs.ts` - scalars, enums and input types

mod code_file;
mod emitter;
mod generator;
mod type_mapper;

pub mod ast;
pub mod fields;
pub mod files;
pub mod inputs;
pub mod resolver;

pub use code_file::{CodeFile, RawCode};
pub use emitter::{ModelEmitter, emit_models};
pub use generator::Generator;
pub use pothos_crud_codegen::language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::{PothosTypeMapper, strip_unchecked};
