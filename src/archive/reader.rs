use crate::error::{ProcessingError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Read a named entry out of a zip archive and decode it as UTF-8 text.
///
/// Both the archive handle and the entry stream are dropped before this
/// returns, on success and on every error path.
pub fn read_entry_to_string(zip_path: &Path, entry_name: &str) -> Result<String> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut entry = match archive.by_name(entry_name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(ProcessingError::EntryNotFound(entry_name.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let mut contents = String::with_capacity(entry.size() as usize);
    entry.read_to_string(&mut contents)?;

    Ok(contents)
}
