use crate::formats::OutputFormat;

pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Name of the asset folder, looked up one level above the executable's directory.
pub const ASSET_DIR_NAME: &str = "IMAGES";

pub const TARGET_WIDTHS: [u32; 3] = [320, 640, 1200];

pub const OUTPUT_FORMATS: [OutputFormat; 2] = [OutputFormat::WebP, OutputFormat::Jpeg];

/// Current file name in the asset folder -> URL-safe basename (no extension).
pub const RENAME_MAP: [(&str, &str); 7] = [
    ("clearing&grubbing.jpg", "clearing-grubbing"),
    ("grading&siteprep.jpg", "grading-siteprep"),
    ("drainage&erosioncontrol.jpg", "drainage-erosioncontrol"),
    ("earth&earthwork.png", "earth-earthwork"),
    ("tophalfofpagebackground.png", "tophalf"),
    ("bottomhalfpagebackground.png", "bottomhalf"),
    ("imageslogo.png", "imageslogo"),
];

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";
pub const PROGRESS_BAR_CHARS: &str = "=> ";
