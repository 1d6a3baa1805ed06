//! Long-description extraction from the project README.
//!
//! This is lenient text slicing, not structured parsing: the description is
//! whatever lies between two marker strings, and a missing marker falls back
//! to the corresponding end of the file.

use std::fs;
use std::path::Path;

use zserio_util::errors::ZserioError;

/// Marker opening the description section.
pub const DESCRIPTION_START: &str = "Zserio PyPi package contains";

/// Marker closing the description section.
pub const DESCRIPTION_END: &str = "\n## Building";

/// Derive the long-form package description from the file at `readme`.
pub fn long_description(readme: &Path) -> Result<String, ZserioError> {
    let text = fs::read_to_string(readme).map_err(ZserioError::Io)?;
    Ok(slice_description(&text).to_string())
}

/// Slice the description out of the README text.
fn slice_description(text: &str) -> &str {
    let start = match text.find(DESCRIPTION_START) {
        Some(index) => index,
        None => {
            tracing::warn!(
                "description start marker {DESCRIPTION_START:?} not found, \
                 using the beginning of the file"
            );
            0
        }
    };
    let end = match text[start..].find(DESCRIPTION_END) {
        Some(index) => start + index,
        None => {
            tracing::warn!(
                "description end marker {DESCRIPTION_END:?} not found, \
                 using the end of the file"
            );
            text.len()
        }
    };
    &text[start..end]
}
