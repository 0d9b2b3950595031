//! Error types for trajectory synthesis.
//!
//! Every variant is fatal: a run either produces the full requested frame
//! count or fails before anything is written. Unknown element symbols are
//! not errors; they are logged and colored with the neutral palette entry.

use thiserror::Error;

/// Errors that can occur while building geometry, assembling frames, or
/// packaging a trajectory.
#[derive(Debug, Error)]
pub enum Error {
    /// No structural units were requested, or a parsed structure has no atoms.
    #[error("reference geometry is empty: {0}")]
    EmptyGeometry(String),

    /// Frame 0 is missing, contains no atoms, or has non-finite coordinates.
    #[error("cannot compute bounds: frame 0 is missing, empty, or not finite")]
    DegenerateBounds,

    /// Zero frames were requested.
    #[error("frame count must be at least 1 (got {0})")]
    InvalidFrameCount(usize),

    /// An externally supplied frame does not match the identity list.
    #[error("frame {frame} has {found} positions but the topology has {expected} atoms")]
    FrameMismatch {
        /// Index of the offending frame.
        frame: usize,
        /// Atom count of the identity list.
        expected: usize,
        /// Position count of the frame.
        found: usize,
    },

    /// A later model lists different atoms than the first one.
    #[error("model {frame}, atom {atom} does not match the first model's atom identity")]
    IdentityMismatch {
        /// Index of the offending model.
        frame: usize,
        /// Index of the first differing atom.
        atom: usize,
    },

    /// A motion term evaluated to NaN or infinity.
    #[error("frame {frame}, atom {atom} has a non-finite position")]
    NonFinitePosition {
        /// Index of the offending frame.
        frame: usize,
        /// Index of the offending atom in canonical order.
        atom: usize,
    },

    /// A motion parameter is outside its valid range.
    #[error("invalid motion parameter '{name}': {detail}")]
    InvalidParameter {
        /// Dotted parameter path, e.g. `water.spacing`.
        name: String,
        /// Description of the problem.
        detail: String,
    },

    /// Failed to parse motion parameters TOML.
    #[error("failed to parse motion parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),

    /// Structure input or trajectory output failed.
    #[error(transparent)]
    Io(#[from] crate::io::Error),
}

impl Error {
    /// Creates an [`EmptyGeometry`](Error::EmptyGeometry) error.
    pub fn empty_geometry(details: impl Into<String>) -> Self {
        Self::EmptyGeometry(details.into())
    }

    /// Creates an [`InvalidParameter`](Error::InvalidParameter) error.
    ///
    /// # Arguments
    ///
    /// * `name` - Dotted parameter path
    /// * `details` - Description of the problem
    pub fn invalid_parameter(name: &str, details: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            detail: details.into(),
        }
    }
}
