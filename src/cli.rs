use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cover-analyzer",
    version,
    about = "Analyze cover image dimensions and recommend a display aspect ratio",
    long_about = "
Cover Analyzer

Scans a single directory (no recursion) for .jpg, .jpeg, .png, .bmp and .gif files,
reads each image header and prints a report with width, height and aspect ratio
statistics, the portrait/square/landscape distribution and a recommended container
ratio that lets every cover render without cropping.

Files that cannot be read are listed and skipped; they never abort the run.

Example Usage:
  # Analyze a directory of extracted EPUB covers
  cover-analyzer ~/epub_covers

  # Same, with diagnostic output on stderr
  cover-analyzer ~/epub_covers --verbose"
)]
pub struct Args {
    /// Directory containing the cover images to analyze
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Enable verbose output with detailed progress information
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
