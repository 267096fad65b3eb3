//! Pattern file source.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::LoadError;

/// Read a pattern file into text for [`GridStore::load_pattern`].
///
/// Bytes are mapped one-to-one onto characters, so column `x` of a line is
/// byte `x` of that line regardless of encoding.
///
/// [`GridStore::load_pattern`]: lifegrid_arena::GridStore::load_pattern
pub fn read_pattern(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes.iter().map(|&b| b as char).collect())
}
