use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Bundles the raw file content with its display name so error factories
/// don't need both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error pointing at the first occurrence of `key`.
    pub fn validation_error_at_key(&self, key: &str, message: impl Into<String>) -> Box<Error> {
        let span = self
            .src
            .find(key)
            .map(|offset| SourceSpan::from(offset..offset + key.len()));
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read config file '{path}'")]
    #[diagnostic(
        code(pothos::config::io),
        help("check --config or the POTHOS_CRUD_CONFIG_PATH environment variable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file")]
    #[diagnostic(code(pothos::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pothos::config::validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_points_at_key() {
        let ctx = SourceContext::new("[global]\noutputDir = \"\"\n", "pothos.toml");
        let err = ctx.validation_error_at_key("outputDir", "outputDir must not be empty");

        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "outputDir must not be empty");
                let span = span.unwrap();
                assert_eq!(span.offset(), 9);
                assert_eq!(span.len(), "outputDir".len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_unknown_key_has_no_span() {
        let ctx = SourceContext::new("", "pothos.toml");
        let err = ctx.validation_error_at_key("missing", "boom");
        assert!(matches!(*err, Error::Validation { span: None, .. }));
    }
}
