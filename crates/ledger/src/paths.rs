use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Name of the isolated output location for one iteration of one source
/// file: the path flattened into a single component plus the pass index.
pub fn iteration_id(tex_path: &str, iteration: usize) -> String {
    let flat = tex_path.replace(['/', '\\'], "-");
    format!("{flat}-iteration-{iteration}")
}

/// The directory an iteration's materialized sources land in.
pub fn iteration_dir(output_root: &Path, iteration_id: &str) -> PathBuf {
    output_root.join(iteration_id)
}

/// Remove and recreate a document's output location.
///
/// This is the single pre-iteration clearing point for a document: it runs
/// once, before any iteration writes, so no stale partial state survives
/// across runs. A location that does not exist yet is simply created.
pub fn clean_directory(path: &Path) -> Result<(), LedgerError> {
    match fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    fs::create_dir_all(path)?;
    Ok(())
}
