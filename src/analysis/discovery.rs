use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::AnalyzeError;
use crate::utils::{has_valid_extension, verbose_println};

/// Extensions considered cover images, compared case-insensitively
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// List the image files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into. Symlinks are listed as-is and
/// resolved when the file is opened, so a dangling link becomes a per-file
/// failure instead of aborting the scan.
pub fn discover_images(dir: &Path, verbose: bool) -> Result<Vec<PathBuf>, AnalyzeError> {
    if !dir.exists() {
        return Err(AnalyzeError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(AnalyzeError::NotADirectory(dir.to_path_buf()));
    }

    verbose_println(verbose, &format!("Scanning directory: {}", dir.display()));

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .min_depth(1)
        .max_depth(1);

    let mut image_files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| AnalyzeError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            continue;
        }

        if has_valid_extension(path, IMAGE_EXTENSIONS) {
            image_files.push(path.to_path_buf());
        } else {
            verbose_println(verbose, &format!("Skipping non-image file: {}", path.display()));
        }
    }

    // Sort for consistent processing order
    image_files.sort();

    verbose_println(verbose, &format!("Found {} image files", image_files.len()));
    Ok(image_files)
}
