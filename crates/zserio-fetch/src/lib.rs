//! Release index client for the zserio compiler: release lookup on the
//! GitHub releases endpoint, artifact download, and zip extraction.

pub mod download;
pub mod extract;
pub mod release;

/// Default release index for the zserio compiler.
pub const DEFAULT_INDEX_URL: &str = "https://api.github.com/repos/ndsev/zserio/releases";
