use std::path::PathBuf;

/// Errors raised by the catalog engine.
///
/// Lookup misses are not errors: `Dict::translate` falls back to the source text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Locale string is not `xx` or `xx_YY`/`xx_YYY`.
    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to traverse directory")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    /// Catalog file is not a well-formed catalog document.
    #[error("failed to decode catalog file {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode catalog file {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid glob pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Source file could not be parsed by the host-language parser.
    #[error("failed to parse source file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
