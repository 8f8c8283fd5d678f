use crate::error::{Result, VariantError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened when moving a source image to its safe name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The file was moved to its new name.
    Renamed { from: PathBuf, to: PathBuf },
    /// The file already had the target name.
    Unchanged(PathBuf),
    /// Another file occupies the target name; nothing was moved.
    TargetExists { source: PathBuf, target: PathBuf },
}

impl RenameOutcome {
    /// Path of the file that holds the image data after the step.
    pub fn image_path(&self) -> &Path {
        match self {
            RenameOutcome::Renamed { to, .. } => to,
            RenameOutcome::Unchanged(path) => path,
            RenameOutcome::TargetExists { source, .. } => source,
        }
    }
}

/// Builds `<dir>/<basename><.ext>` with the source extension lowercased.
pub fn target_path(source: &Path, basename: &str) -> Result<PathBuf> {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    if source.file_name().is_none() {
        return Err(VariantError::SourceNotFound(source.display().to_string()));
    }

    let file_name = match source.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}.{}", basename, ext.to_lowercase()),
        None => basename.to_string(),
    };

    Ok(dir.join(file_name))
}

/// Moves `source` to its safe name next to it, never replacing an existing file.
pub fn safe_rename(source: &Path, basename: &str) -> Result<RenameOutcome> {
    let target = target_path(source, basename)?;

    if source.file_name() == target.file_name() {
        return Ok(RenameOutcome::Unchanged(target));
    }

    match move_no_clobber(source, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(RenameOutcome::TargetExists {
                source: source.to_path_buf(),
                target,
            });
        }
        Err(e) => return Err(e.into()),
    }

    Ok(RenameOutcome::Renamed {
        from: source.to_path_buf(),
        to: target,
    })
}

/// Links `target` to `source`, then drops the old name. Creating the link
/// fails with `AlreadyExists` when `target` is taken, so an existing file is
/// never replaced, even one created after the caller looked.
fn move_no_clobber(source: &Path, target: &Path) -> io::Result<()> {
    fs::hard_link(source, target)?;
    if let Err(e) = fs::remove_file(source) {
        let _ = fs::remove_file(target);
        return Err(e);
    }
    Ok(())
}
