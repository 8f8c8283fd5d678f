use crate::codec::{resize_raster, ImageCodec, Raster};
use crate::config::RunConfig;
use crate::error::{Result, VariantError};
use crate::formats::OutputFormat;
use crate::utils::{display_name, format_file_size};
use crate::{skip, success, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Outcome of generating one width/encoding combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantStatus {
    Written(PathBuf),
    Skipped(PathBuf),
    Failed { path: PathBuf, reason: String },
}

/// Everything that happened while generating variants for one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantReport {
    pub decode_failed: bool,
    pub statuses: Vec<VariantStatus>,
}

impl VariantReport {
    pub fn written(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s, VariantStatus::Written(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s, VariantStatus::Skipped(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s, VariantStatus::Failed { .. }))
            .count()
    }
}

/// Height that keeps the aspect ratio at `width`, rounded to the nearest
/// pixel and never below one.
pub fn target_height(original_width: u32, original_height: u32, width: u32) -> u32 {
    let scale = width as f64 / original_width as f64;
    let height = (original_height as f64 * scale).round();
    (height as u32).max(1)
}

/// `<basename>-<width>.<ext>`: the name site markup refers to.
pub fn variant_file_name(basename: &str, width: u32, format: OutputFormat) -> String {
    format!("{}-{}.{}", basename, width, format.extension())
}

pub fn variant_path(dir: &Path, basename: &str, width: u32, format: OutputFormat) -> PathBuf {
    dir.join(variant_file_name(basename, width, format))
}

/// Reads and decodes the source, then writes every missing variant.
///
/// Failures never escape: a source that cannot be decoded yields a report
/// with `decode_failed` set, and a failing encode or write only affects its
/// own width/encoding combination.
pub fn generate_variants<C: ImageCodec + ?Sized>(
    codec: &C,
    source: &Path,
    basename: &str,
    config: &RunConfig,
) -> VariantReport {
    let mut report = VariantReport::default();

    let raster = match load_raster(codec, source) {
        Ok(raster) => raster,
        Err(e) => {
            warn!("Could not open {}: {}", display_name(source), e);
            report.decode_failed = true;
            return report;
        }
    };

    for &width in &config.widths {
        let height = target_height(raster.width, raster.height, width);

        let resized = match resize_raster(&raster, width, height) {
            Ok(resized) => resized,
            Err(e) => {
                for &format in &config.formats {
                    let path = variant_path(&config.asset_dir, basename, width, format);
                    warn!("Failed to write {}: {}", display_name(&path), e);
                    report.statuses.push(VariantStatus::Failed {
                        path,
                        reason: e.to_string(),
                    });
                }
                continue;
            }
        };

        for &format in &config.formats {
            let path = variant_path(&config.asset_dir, basename, width, format);
            let status = write_variant(codec, &resized, format, &path, config);
            report.statuses.push(status);
        }
    }

    report
}

fn load_raster<C: ImageCodec + ?Sized>(codec: &C, source: &Path) -> Result<Raster> {
    let bytes = fs::read(source)?;
    codec.decode(&bytes)
}

fn write_variant<C: ImageCodec + ?Sized>(
    codec: &C,
    raster: &Raster,
    format: OutputFormat,
    path: &Path,
    config: &RunConfig,
) -> VariantStatus {
    if path.exists() {
        skip!("Skipping existing file: {}", display_name(path));
        return VariantStatus::Skipped(path.to_path_buf());
    }

    let result = codec
        .encode(raster, format, config.quality)
        .and_then(|bytes| write_new_file(&config.asset_dir, path, &bytes).map(|_| bytes.len()));

    match result {
        Ok(size) => {
            success!(
                "Wrote {} ({}x{}, {})",
                display_name(path),
                raster.width,
                raster.height,
                format_file_size(size as u64)
            );
            VariantStatus::Written(path.to_path_buf())
        }
        Err(VariantError::OutputExists(_)) => {
            skip!("Skipping existing file: {}", display_name(path));
            VariantStatus::Skipped(path.to_path_buf())
        }
        Err(e) => {
            warn!("Failed to write {}: {}", display_name(path), e);
            VariantStatus::Failed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    }
}

/// Writes `bytes` to `path` through a temporary file in `dir`. The final
/// link refuses to replace a file that already exists.
fn write_new_file(dir: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;

    tmp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            VariantError::OutputExists(path.to_path_buf())
        } else {
            VariantError::Io(e.error)
        }
    })?;

    Ok(())
}
