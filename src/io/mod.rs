//! Structure input and trajectory output.
//!
//! - [`pdb`] – PDB reader yielding every model of a file, backed by `pdbtbx`.
//! - [`json`] – The trajectory JSON record consumed by the viewer.
//! - [`read_structure_file`] – Opens a structure path, reporting a missing
//!   file as [`Error::SourceUnavailable`] before any parsing happens.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod error;
pub mod json;
pub mod pdb;

pub use error::Error;
pub use json::{read_trajectory, write_trajectory};

use crate::model::structure::Structure;

/// Reads a PDB file from disk.
///
/// # Errors
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be opened and
/// [`Error::Pdb`] if the parser rejects the file.
pub fn read_structure_file(path: &Path) -> Result<Structure, Error> {
    let file = File::open(path).map_err(|e| Error::source_unavailable(path, e))?;
    pdb::read(BufReader::new(file))
}
