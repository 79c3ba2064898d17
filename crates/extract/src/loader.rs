// ABOUTME: Loads marker overrides from JSON files on disk.
// ABOUTME: Provides load_markers() which reads, parses, and validates a marker file.

use std::fs;
use std::path::Path;

use crate::error::ExtractError;
use crate::markers::Markers;

/// Reads a marker override file and validates its selectors.
///
/// Keys missing from the file keep their default values.
pub fn load_markers(path: impl AsRef<Path>) -> Result<Markers, ExtractError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
    let markers = Markers::from_json(&json)?;
    markers.validate()?;
    Ok(markers)
}
