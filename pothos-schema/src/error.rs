use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read schema description '{path}'")]
    #[diagnostic(
        code(pothos::schema::io),
        help("export the DMMF with `prisma` and pass its path with --schema")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema description")]
    #[diagnostic(code(pothos::schema::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from(o..o));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert a 1-based line/column pair from serde_json into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
