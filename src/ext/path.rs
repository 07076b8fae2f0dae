//! Directory helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the subdirectory of `dir` named `name`, reusing an existing one by
/// case-insensitive match, or creating it when none exists.
pub fn ensure_subdir(dir: &Path, name: &str) -> io::Result<PathBuf> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        if file_name
            .to_string_lossy()
            .eq_ignore_ascii_case(name)
        {
            return Ok(entry.path());
        }
    }

    let path = dir.join(name);
    fs::create_dir(&path)?;
    Ok(path)
}

/// Removes every entry of `dir` (files and subtrees), keeping `dir` itself.
pub fn clear_dir(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
