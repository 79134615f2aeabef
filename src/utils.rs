use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Create a styled progress bar
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.blue} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );
    pb
}

/// Format duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 60 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else if total_secs > 0 {
        format!("{}.{:03}s", total_secs, millis)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a file has one of the specified extensions (compared case-insensitively)
pub fn has_valid_extension(path: &Path, extensions: &[&str]) -> bool {
    match get_file_extension(path) {
        Some(ext) => extensions.contains(&ext.as_str()),
        None => false,
    }
}

/// File name of a path as a displayable string
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Print verbose information if verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{} {}", style("[VERBOSE]").dim(), message);
    }
}

/// Print warning message
pub fn warn_println(message: &str) {
    eprintln!("{} {}", style("[WARNING]").yellow().bold(), message);
}

/// Print error message
pub fn error_println(message: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(1)), "1.000s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_get_file_extension() {
        assert_eq!(
            get_file_extension(Path::new("cover.JPG")),
            Some("jpg".to_string())
        );
        assert_eq!(
            get_file_extension(Path::new("dir/cover.tar.Png")),
            Some("png".to_string())
        );
        assert_eq!(get_file_extension(Path::new("README")), None);
        assert_eq!(get_file_extension(Path::new(".hidden")), None);
    }

    #[test]
    fn test_has_valid_extension() {
        let extensions = ["jpg", "jpeg", "png"];

        assert!(has_valid_extension(Path::new("a.jpg"), &extensions));
        assert!(has_valid_extension(Path::new("a.JPEG"), &extensions));
        assert!(has_valid_extension(Path::new("a.Png"), &extensions));

        assert!(!has_valid_extension(Path::new("a.webp"), &extensions));
        assert!(!has_valid_extension(Path::new("a.jpg.txt"), &extensions));
        assert!(!has_valid_extension(Path::new("jpg"), &extensions));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(&PathBuf::from("covers/book.png")), "book.png");
        assert_eq!(display_name(Path::new("book.png")), "book.png");
    }
}
