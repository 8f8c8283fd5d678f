use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory entry reduced to what resolution needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryName {
    pub name: String,
    pub path: PathBuf,
}

impl DirEntryName {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Resolves a configured file name against a directory listing.
///
/// An exact name match wins; otherwise the first entry whose name matches
/// case-insensitively is returned. Listing order breaks ties.
pub fn resolve_source(name: &str, listing: &[DirEntryName]) -> Option<PathBuf> {
    if let Some(entry) = listing.iter().find(|e| e.name == name) {
        return Some(entry.path.clone());
    }

    let wanted = name.to_lowercase();
    listing
        .iter()
        .find(|e| e.name.to_lowercase() == wanted)
        .map(|e| e.path.clone())
}

/// Lists the immediate entries of `dir`, sorted by file name.
pub fn list_directory(dir: &Path) -> Result<Vec<DirEntryName>> {
    let mut listing = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        listing.push(DirEntryName::new(
            entry.file_name().to_string_lossy(),
            entry.path(),
        ));
    }

    Ok(listing)
}

/// Finds `name` inside `dir`: a direct lookup first, then a case-insensitive
/// scan of the directory's entries.
pub fn find_source(dir: &Path, name: &str) -> Result<Option<PathBuf>> {
    let direct = dir.join(name);
    if direct.exists() {
        return Ok(Some(direct));
    }

    let listing = list_directory(dir)?;
    Ok(resolve_source(name, &listing))
}
