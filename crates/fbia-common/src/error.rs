//! Error types for fbia
//!
//! Rendering itself cannot fail; these cover the edges around it (decoding
//! documents, loading configuration, file I/O).

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use std::path::PathBuf;

/// Main error type for fbia operations
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum FbiaError {
    /// Document decode error with source location
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded or saved
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("io error: {0}")]
    #[diagnostic(code(fbia::io))]
    Io(#[from] std::io::Error),
}

/// Parse error with source code location information
#[derive(thiserror::Error, Debug, Diagnostic)]
#[error("parse error: {kind}")]
#[diagnostic(code(fbia::parse))]
pub struct ParseError {
    kind: ParseErrorKind,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    err_location: SourceSpan,
    err_line_col: (usize, usize),
    #[help]
    advice: Option<String>,
}

impl ParseError {
    /// Wrap a JSON decode failure, pointing at the offending spot in `input`.
    pub fn json(err: serde_json::Error, name: &str, input: &str) -> Self {
        let line = err.line();
        let column = err.column();
        // serde_json reports 1-based columns, 0 when the position is unknown
        let offset = SourceOffset::from_location(input, line, column.max(1));
        let advice = match err.classify() {
            serde_json::error::Category::Data => Some(
                "each entry must be null or a block object with a known `type` (and `embedType` for embeds)"
                    .to_string(),
            ),
            serde_json::error::Category::Eof => {
                Some("the document ended early; is the JSON array closed?".to_string())
            }
            _ => None,
        };
        Self {
            kind: ParseErrorKind::Json(err),
            src: NamedSource::new(name, input.to_string()),
            err_location: SourceSpan::new(offset, 1),
            err_line_col: (line, column),
            advice,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// 1-based line and column reported by the decoder.
    pub fn line_col(&self) -> (usize, usize) {
        self.err_line_col
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Configuration load/save errors
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    #[diagnostic(code(fbia::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported config format: {}", path.display())]
    #[diagnostic(
        code(fbia::config::format),
        help("use a .toml or .json file")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid JSON config")]
    #[diagnostic(code(fbia::config::json))]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML config")]
    #[diagnostic(code(fbia::config::toml))]
    TomlDe(#[from] toml::de::Error),

    #[error("could not encode config as TOML")]
    #[diagnostic(code(fbia::config::toml))]
    TomlSer(#[from] toml::ser::Error),
}
