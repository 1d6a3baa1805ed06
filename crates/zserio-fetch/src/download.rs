//! Artifact download from release asset URLs.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use zserio_util::errors::ZserioError;
use zserio_util::progress::download_bar;

/// Download a file from `url` to `dest`, showing a progress bar.
/// Returns the path written.
pub fn download_file(url: &str, dest: &Path) -> Result<PathBuf, ZserioError> {
    tracing::info!("Downloading {}", url);

    let resp = reqwest::blocking::Client::builder()
        .user_agent("zserio-dist")
        .build()
        .map_err(|e| ZserioError::Network {
            message: format!("Failed to build HTTP client: {e}"),
        })?
        .get(url)
        .send()
        .map_err(|e| ZserioError::Network {
            message: format!("Failed to download {url}: {e}"),
        })?;

    if !resp.status().is_success() {
        return Err(ZserioError::Network {
            message: format!("HTTP {} for {url}", resp.status()),
        });
    }

    let total = resp.content_length().unwrap_or(0);
    let pb = if total > 0 {
        Some(download_bar(total))
    } else {
        None
    };

    let mut out = File::create(dest).map_err(ZserioError::Io)?;
    let mut reader = resp;
    let mut buf = [0u8; 8192];
    loop {
        let n = reader.read(&mut buf).map_err(|e| ZserioError::Network {
            message: format!("Read error: {e}"),
        })?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).map_err(ZserioError::Io)?;
        if let Some(ref pb) = pb {
            pb.inc(n as u64);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(dest.to_path_buf())
}
