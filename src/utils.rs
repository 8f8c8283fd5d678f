//! Small helpers shared by the pipeline stages.

use crate::constants::{PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

/// File name of `path` for log lines, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Progress bar over the configured entries; hidden when output is quiet.
pub fn create_progress_bar(len: u64) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden());
    }

    let pb = ProgressBar::new(len);
    match ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        Ok(style) => pb.set_style(style.progress_chars(PROGRESS_BAR_CHARS)),
        Err(_) => pb.set_style(ProgressStyle::default_bar()),
    }
    pb
}

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
