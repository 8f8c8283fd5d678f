use crate::constants::{
    ASSET_DIR_NAME, DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY, OUTPUT_FORMATS, RENAME_MAP,
    TARGET_WIDTHS,
};
use crate::error::{Result, VariantError};
use crate::formats::OutputFormat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One configured (original file name -> safe basename) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub original: String,
    pub basename: String,
}

impl RenameEntry {
    pub fn new(original: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            basename: basename.into(),
        }
    }
}

/// Everything a run needs, passed explicitly into the orchestrator.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub asset_dir: PathBuf,
    pub entries: Vec<RenameEntry>,
    pub widths: Vec<u32>,
    pub formats: Vec<OutputFormat>,
    pub quality: u8,
}

impl RunConfig {
    /// Builds a configuration, rejecting duplicate source names, zero widths
    /// and out-of-range quality.
    pub fn new(
        asset_dir: PathBuf,
        entries: Vec<RenameEntry>,
        widths: Vec<u32>,
        formats: Vec<OutputFormat>,
        quality: Option<u8>,
    ) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(VariantError::InvalidQuality(quality));
        }

        if let Some(&width) = widths.iter().find(|&&w| w == 0) {
            return Err(VariantError::InvalidWidth(width));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.original.as_str()) {
                return Err(VariantError::DuplicateEntry(entry.original.clone()));
            }
        }

        Ok(Self {
            asset_dir,
            entries,
            widths,
            formats,
            quality,
        })
    }

    /// The compiled-in configuration shipped with the binary.
    pub fn production(asset_dir: PathBuf) -> Result<Self> {
        let entries = RENAME_MAP
            .iter()
            .map(|(original, basename)| RenameEntry::new(*original, *basename))
            .collect();

        Self::new(
            asset_dir,
            entries,
            TARGET_WIDTHS.to_vec(),
            OUTPUT_FORMATS.to_vec(),
            Some(DEFAULT_QUALITY),
        )
    }
}

/// Locates the asset folder relative to the executable: one level above the
/// directory containing it.
pub fn asset_dir_for_exe(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    let root = exe_dir.parent().unwrap_or(exe_dir);
    root.join(ASSET_DIR_NAME)
}
