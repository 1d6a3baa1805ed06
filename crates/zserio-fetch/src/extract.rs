//! Zip archive extraction.

use std::fs;
use std::path::Path;

use zserio_util::errors::ZserioError;

/// Extract a zip archive to `dest`, preserving Unix mode bits.
pub fn extract_zip(zip_path: &Path, dest: &Path) -> Result<(), ZserioError> {
    let file = fs::File::open(zip_path).map_err(ZserioError::Io)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| ZserioError::Extract {
        message: format!("Failed to open zip {}: {e}", zip_path.display()),
    })?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| ZserioError::Extract {
            message: format!("Zip entry error: {e}"),
        })?;

        let out_path = dest.join(entry.mangled_name());

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(ZserioError::Io)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(ZserioError::Io)?;
            }
            let mut out = fs::File::create(&out_path).map_err(ZserioError::Io)?;
            std::io::copy(&mut entry, &mut out).map_err(|e| ZserioError::Extract {
                message: format!("Failed to read zip entry: {e}"),
            })?;

            // Preserve executable bit on Unix
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    fs::set_permissions(&out_path, fs::Permissions::from_mode(mode))
                        .map_err(ZserioError::Io)?;
                }
            }
        }
    }
    Ok(())
}
