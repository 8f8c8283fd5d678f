use clap::Parser;

#[derive(Parser)]
#[command(
    name = "img-variants",
    about = "Rename site images to URL-safe names and generate responsive variants",
    long_about = "img-variants prepares the IMAGES folder of a static site. \
                  It renames a fixed set of source images to URL-safe basenames and writes \
                  WebP and JPEG copies at 320, 640 and 1200 pixels wide. \
                  Existing files are never overwritten, so the tool can be re-run safely.",
    version,
    after_help = "The IMAGES folder is looked up one level above the directory holding the binary.\n\
                  Keep a backup of it before the first run."
)]
pub struct Args {}
