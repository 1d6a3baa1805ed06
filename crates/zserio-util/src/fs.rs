use std::fs;
use std::path::Path;

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Recursively copy `src` into `dst`, overwriting files that already exist.
///
/// File names listed in `exclude` are skipped at every directory level.
/// Directories are created as needed; `dst` itself need not exist.
pub fn copy_tree(src: &Path, dst: &Path, exclude: &[&str]) -> std::io::Result<()> {
    ensure_dir(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        if exclude
            .iter()
            .any(|e| name.to_string_lossy().as_ref() == *e)
        {
            continue;
        }

        let from = entry.path();
        let to = dst.join(&name);
        if entry.file_type()?.is_dir() {
            copy_tree(&from, &to, exclude)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
