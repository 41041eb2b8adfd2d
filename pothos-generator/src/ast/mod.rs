//! TypeScript AST builders for imports, exports, declarations and literals.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod arrays;
mod chain;
mod consts;
mod exports;
mod fns;
mod imports;
mod literal;
mod objects;

pub use arrays::JsArray;
pub use chain::MethodChain;
pub use consts::Const;
pub use exports::Export;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use literal::{property_key, quote, single_quote, template};
pub use objects::{ArrowFn, JsObject, PropertyValue};
