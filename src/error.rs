use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for shape generation and model output.
#[derive(Debug, Error)]
pub enum LdShapeError {
    #[error("shape `{name}` is not supported")]
    UnsupportedShape { name: String },

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("cannot write model to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LdShapeError {
    /// Short name of the failure kind, used when reporting a failed run.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedShape { .. } => "UnsupportedShapeError",
            Self::Geometry(_) => "InvalidGeometryError",
            Self::OutputWrite { .. } => "OutputWriteError",
        }
    }
}

/// Errors raised while resolving a geometry string or a variant.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("dimension `{token}` contains no digits")]
    NoDigits { token: String },

    #[error("dimension `{token}` is too large")]
    OutOfRange { token: String },

    #[error("{shape} needs {expected} dimensions, got {found}")]
    MissingDimension {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{shape} takes at most 3 dimensions, got {found}")]
    TooManyDimensions { shape: &'static str, found: usize },

    #[error("`{value}` is not a variant of {shape}")]
    UnknownVariant { shape: &'static str, value: String },
}

/// Convenience type alias for results using [`LdShapeError`].
pub type Result<T> = std::result::Result<T, LdShapeError>;
