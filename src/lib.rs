pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod pipeline;
pub mod renamer;
pub mod resolver;
pub mod utils;
pub mod variants;

pub use codec::{resize_raster, ImageCodec, ImageCrateCodec, Raster};
pub use config::{asset_dir_for_exe, RenameEntry, RunConfig};
pub use error::{Result, VariantError};
pub use formats::OutputFormat;
pub use pipeline::{ensure_asset_dir, run, EntryOutcome, RunSummary};
pub use renamer::{safe_rename, RenameOutcome};
pub use resolver::{find_source, list_directory, resolve_source, DirEntryName};
pub use variants::{
    generate_variants, target_height, variant_file_name, VariantReport, VariantStatus,
};
