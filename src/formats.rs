//! Output encodings produced for every variant.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// WebP, keeps the source channel layout
    WebP,
    /// JPEG, always three channels
    Jpeg,
}

impl OutputFormat {
    /// Returns the canonical file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// Whether an alpha channel survives encoding in this format
    pub fn keeps_alpha(&self) -> bool {
        match self {
            OutputFormat::WebP => true,
            OutputFormat::Jpeg => false,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::WebP => "WebP",
            OutputFormat::Jpeg => "JPEG",
        };
        write!(f, "{}", name)
    }
}
