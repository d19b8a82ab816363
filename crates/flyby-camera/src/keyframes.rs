use std::path::Path;

use crate::error::CameraError;
use crate::position::CameraPosition;

/// Writes an ordered list of camera positions to a keyframe file.
///
/// The file is a JSON array with one record per position, each record holding
/// the fields `center` and `angles` as 3-element arrays followed by `zoom`,
/// `perspective` and `transition_time`. Field names and array ordering are the
/// wire format and must be preserved for compatibility.
///
/// # Arguments
///
/// * `file_path` - The path to the keyframe file.
/// * `positions` - The ordered list of positions to write.
pub fn save(
    file_path: impl AsRef<Path>,
    positions: &[CameraPosition],
) -> Result<(), CameraError> {
    let json = serde_json::to_string_pretty(positions)?;
    std::fs::write(file_path, json)?;
    Ok(())
}

/// Reads an ordered list of camera positions from a keyframe file.
///
/// The whole load fails atomically: a missing file, invalid JSON, a missing
/// field or a wrong array arity surfaces an error and no partial list is
/// returned.
///
/// # Arguments
///
/// * `file_path` - The path to the keyframe file.
///
/// # Returns
///
/// The positions in the same order they were saved.
pub fn load(file_path: impl AsRef<Path>) -> Result<Vec<CameraPosition>, CameraError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(CameraError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let json = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&json)?)
}
