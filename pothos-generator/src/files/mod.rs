//! TypeScript file generators.
//!
//! Per model: `object_ts`, `resolver_ts` and `index_ts`. At the output
//! root: `utils_ts`, `objects_ts`, `autocrud_ts` and `inputs_ts`.

mod autocrud_ts;
mod index_ts;
mod inputs_ts;
mod object_ts;
mod objects_ts;
mod resolver_ts;
mod utils_ts;

pub use autocrud_ts::AutocrudTs;
pub use index_ts::{KindIndexTs, ModelIndexTs};
pub use inputs_ts::{InputsTs, NEVER};
pub use object_ts::ObjectTs;
pub use objects_ts::ObjectsTs;
pub use resolver_ts::ResolverTs;
pub use utils_ts::UtilsTs;
