use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("structure source '{path}' is unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse PDB data: {0}")]
    Pdb(String),

    #[error("failed to (de)serialize trajectory JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Vec<pdbtbx::PDBError>> for Error {
    fn from(errors: Vec<pdbtbx::PDBError>) -> Self {
        let details = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Error::Pdb(details)
    }
}

impl Error {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
