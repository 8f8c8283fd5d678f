use crate::codec::ImageCodec;
use crate::config::{RenameEntry, RunConfig};
use crate::error::{Result, VariantError};
use crate::renamer::{safe_rename, RenameOutcome};
use crate::resolver::find_source;
use crate::utils::{create_progress_bar, display_name};
use crate::variants::{generate_variants, VariantReport};
use crate::{info, skip, success, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Terminal state of one configured entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The source could not be found, not even case-insensitively.
    SkippedNotFound { original: String },
    /// The source was found; `rename` is `None` when moving it failed and
    /// variants were generated from the untouched source.
    Processed {
        source: PathBuf,
        rename: Option<RenameOutcome>,
        report: VariantReport,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: Vec<EntryOutcome>,
}

impl RunSummary {
    pub fn not_found(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, EntryOutcome::SkippedNotFound { .. }))
            .count()
    }

    pub fn renamed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    EntryOutcome::Processed {
                        rename: Some(RenameOutcome::Renamed { .. }),
                        ..
                    }
                )
            })
            .count()
    }

    pub fn decode_failures(&self) -> usize {
        self.reports().filter(|r| r.decode_failed).count()
    }

    pub fn written(&self) -> usize {
        self.reports().map(VariantReport::written).sum()
    }

    pub fn skipped(&self) -> usize {
        self.reports().map(VariantReport::skipped).sum()
    }

    pub fn failed(&self) -> usize {
        self.reports().map(VariantReport::failed).sum()
    }

    fn reports(&self) -> impl Iterator<Item = &VariantReport> {
        self.entries.iter().filter_map(|e| match e {
            EntryOutcome::Processed { report, .. } => Some(report),
            EntryOutcome::SkippedNotFound { .. } => None,
        })
    }
}

/// Fails when the asset directory is missing; nothing else happens.
pub fn ensure_asset_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(VariantError::AssetDirNotFound(dir.to_path_buf()));
    }
    Ok(())
}

/// Runs every configured entry in order: resolve, rename, generate variants.
///
/// Only a missing asset directory is an error. Everything else is logged and
/// recorded in the returned summary.
pub fn run<C: ImageCodec + ?Sized>(config: &RunConfig, codec: &C) -> Result<RunSummary> {
    ensure_asset_dir(&config.asset_dir)?;

    info!("🚀 Processing images in {}", config.asset_dir.display());
    let start_time = Instant::now();

    let progress = create_progress_bar(config.entries.len() as u64);
    let mut summary = RunSummary::default();

    for entry in &config.entries {
        progress.set_message(entry.original.clone());
        summary.entries.push(process_entry(config, codec, entry));
        progress.inc(1);
    }

    progress.finish_and_clear();

    info!(
        "Done. Check {} for generated files.",
        config.asset_dir.display()
    );
    print_summary(&summary, start_time);

    Ok(summary)
}

fn process_entry<C: ImageCodec + ?Sized>(
    config: &RunConfig,
    codec: &C,
    entry: &RenameEntry,
) -> EntryOutcome {
    let source = match find_source(&config.asset_dir, &entry.original) {
        Ok(Some(path)) => path,
        Ok(None) => {
            skip!("Source not found (skipping): {}", entry.original);
            return EntryOutcome::SkippedNotFound {
                original: entry.original.clone(),
            };
        }
        Err(e) => {
            warn!("Could not scan for {}: {}", entry.original, e);
            return EntryOutcome::SkippedNotFound {
                original: entry.original.clone(),
            };
        }
    };

    let rename = match safe_rename(&source, &entry.basename) {
        Ok(outcome) => {
            log_rename(&outcome);
            Some(outcome)
        }
        Err(e) => {
            warn!(
                "Failed to rename {} -> {}: {}",
                display_name(&source),
                entry.basename,
                e
            );
            None
        }
    };

    let image_path = rename
        .as_ref()
        .map(|outcome| outcome.image_path().to_path_buf())
        .unwrap_or_else(|| source.clone());

    let report = generate_variants(codec, &image_path, &entry.basename, config);

    EntryOutcome::Processed {
        source,
        rename,
        report,
    }
}

fn log_rename(outcome: &RenameOutcome) {
    match outcome {
        RenameOutcome::Renamed { from, to } => {
            success!("Renamed {} -> {}", display_name(from), display_name(to));
        }
        RenameOutcome::Unchanged(_) => {}
        RenameOutcome::TargetExists { target, .. } => {
            skip!(
                "Target already exists, skipping rename: {}",
                display_name(target)
            );
        }
    }
}

fn print_summary(summary: &RunSummary, start_time: Instant) {
    info!("\n📊 Summary:");
    info!("  📁 Entries: {}", summary.entries.len());
    info!("  ✏️  Renamed: {}", summary.renamed());
    info!("  🔎 Not found: {}", summary.not_found());
    info!("  🖼️  Variants written: {}", summary.written());
    info!("  ⏭️  Variants skipped: {}", summary.skipped());
    if summary.failed() > 0 || summary.decode_failures() > 0 {
        info!(
            "  ⚠️  Failures: {} variants, {} unreadable sources",
            summary.failed(),
            summary.decode_failures()
        );
    }
    info!("  ⏱️  Total time: {:?}", start_time.elapsed());
}
