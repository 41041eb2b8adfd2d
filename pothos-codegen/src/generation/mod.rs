//! Output management.
//!
//! - [`FileRegistry`] - declarative file registration, preview and best-effort writing

mod registry;

pub use registry::{FailedWrite, FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
