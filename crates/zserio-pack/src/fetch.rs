//! Release download step: resolve the latest release and materialize its
//! compiler and runtime bundles under the download directory.

use zserio_fetch::{download, extract, release};
use zserio_util::errors::ZserioError;
use zserio_util::fs::ensure_dir;
use zserio_util::progress::status;

use crate::config::PackConfig;

/// Download and extract the latest release.
///
/// Returns the release version. Any download or extraction failure aborts
/// the packaging run; no partial-package recovery is attempted.
pub fn fetch_latest_release(config: &PackConfig) -> Result<String, ZserioError> {
    let release = release::fetch_latest(&config.index_url)?;
    let version = release.version().to_string();
    status("Fetched", &format!("release index (zserio {version})"));

    let download_dir = config.download_dir();
    ensure_dir(&download_dir).map_err(ZserioError::Io)?;

    let compiler = release.compiler_asset()?;
    status("Downloading", &compiler.name);
    let compiler_zip = download_dir.join(&compiler.name);
    download::download_file(&compiler.browser_download_url, &compiler_zip)?;
    extract::extract_zip(&compiler_zip, &download_dir)?;

    let runtime = release.runtime_asset()?;
    status("Downloading", &runtime.name);
    let runtime_zip = download_dir.join(&runtime.name);
    download::download_file(&runtime.browser_download_url, &runtime_zip)?;
    extract::extract_zip(&runtime_zip, &download_dir)?;

    Ok(version)
}
