use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

/// Everything that can abort a generation run.
#[derive(Debug, Error)]
pub enum GenError {
    /// A family of arity zero has no alternatives to choose from.
    #[error("invalid arity {arity}: a variant family needs at least one alternative")]
    InvalidArity { arity: usize },

    #[error("invalid support path `{path}`: {source}")]
    InvalidSupportPath {
        path: String,
        #[source]
        source: syn::Error,
    },

    /// The emitted tokens did not re-parse as a Rust source file.
    #[error("emitted code is not valid Rust: {0}")]
    Syntax(#[from] syn::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is out of date; regenerate it", path.display())]
    Stale { path: PathBuf },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io { path: path.into(), source }
    }
}
