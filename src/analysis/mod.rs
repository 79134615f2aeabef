pub mod discovery;
pub mod record;
pub mod report;
pub mod stats;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

use crate::utils::{create_progress_bar, display_name, format_duration, verbose_println};

pub use discovery::{discover_images, IMAGE_EXTENSIONS};
pub use record::{read_image_record, DecodeError, ImageRecord};
pub use stats::{AnalysisReport, ExtractionFailure, Orientation, OrientationCounts, Summary};

/// Failures that stop the analysis of a directory
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

/// Records and failures produced by the extraction stage
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<ImageRecord>,
    pub failures: Vec<ExtractionFailure>,
}

/// Scans one directory of cover images and reports on their dimensions
pub struct CoverAnalyzer {
    verbose: bool,
}

impl CoverAnalyzer {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run discovery, extraction, aggregation and reporting on `dir`.
    ///
    /// A missing directory or a directory without readable images is reported
    /// to `out` and yields `Ok(None)`. Per-file read errors are reported and
    /// skipped. Anything else (not a directory, enumeration or output
    /// failures) is returned as an error.
    pub fn analyze<W: Write + ?Sized>(
        &self,
        dir: &Path,
        out: &mut W,
    ) -> Result<Option<AnalysisReport>> {
        let start_time = Instant::now();

        let extraction = match self.extract(dir, out) {
            Ok(extraction) => extraction,
            Err(AnalyzeError::DirectoryNotFound(path)) => {
                report::write_directory_not_found(out, &path)?;
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let Extraction { records, failures } = extraction;
        let analysis = match AnalysisReport::from_records(&records, failures) {
            Some(analysis) => analysis,
            None => {
                report::write_nothing_to_analyze(out)?;
                return Ok(None);
            }
        };

        report::write_report(out, &analysis).context("Failed to write report")?;
        out.flush().context("Failed to flush report")?;

        verbose_println(
            self.verbose,
            &format!(
                "Analyzed {} images in {}",
                analysis.total,
                format_duration(start_time.elapsed())
            ),
        );
        Ok(Some(analysis))
    }

    /// Discover candidate files and read each one, printing one line per file
    pub fn extract<W: Write + ?Sized>(
        &self,
        dir: &Path,
        out: &mut W,
    ) -> std::result::Result<Extraction, AnalyzeError> {
        let image_files = discover_images(dir, self.verbose)?;

        let pb = create_progress_bar(image_files.len() as u64);
        pb.set_message("Reading image headers");

        let mut extraction = Extraction::default();
        for path in &image_files {
            match read_image_record(path) {
                Ok(record) => {
                    pb.suspend(|| report::write_record_line(out, &record))?;
                    extraction.records.push(record);
                }
                Err(error) => {
                    let failure = ExtractionFailure {
                        filename: display_name(path),
                        error,
                    };
                    pb.suspend(|| report::write_failure_line(out, &failure))?;
                    extraction.failures.push(failure);
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        verbose_println(
            self.verbose,
            &format!(
                "Read {} images, {} failed",
                extraction.records.len(),
                extraction.failures.len()
            ),
        );
        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};
    use std::fs;

    fn run(dir: &Path) -> (Option<AnalysisReport>, String) {
        let mut buf = Vec::new();
        let report = CoverAnalyzer::new(false).analyze(dir, &mut buf).unwrap();
        let text = console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).into_owned();
        (report, text)
    }

    #[test]
    fn test_portrait_and_landscape_scenario() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(600, 800).save(dir.path().join("portrait.jpg")).unwrap();
        RgbaImage::new(900, 600).save(dir.path().join("landscape.png")).unwrap();

        let (report, text) = run(dir.path());
        let report = report.unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.width.min, 600.0);
        assert_eq!(report.width.max, 900.0);
        assert!((report.aspect_ratio.min - 0.75).abs() < 1e-9);
        assert!((report.aspect_ratio.max - 1.5).abs() < 1e-9);
        assert_eq!(report.orientations.portrait, 1);
        assert_eq!(report.orientations.square, 0);
        assert_eq!(report.orientations.landscape, 1);
        assert!((report.suggested_container_ratio() - 0.75).abs() < 1e-9);

        assert!(text.contains("✓ portrait.jpg: 600x800 (ratio: 0.750)"));
        assert!(text.contains("✓ landscape.png: 900x600 (ratio: 1.500)"));
        assert!(text.contains("Formats: JPEG, PNG"));
        assert!(text.contains("Suggested container ratio: 0.750"));
    }

    #[test]
    fn test_corrupt_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(100, 100).save(dir.path().join("a.png")).unwrap();
        RgbImage::new(50, 100).save(dir.path().join("b.bmp")).unwrap();
        fs::write(dir.path().join("c.jpg"), b"garbage").unwrap();
        fs::write(dir.path().join("d.gif"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"not a candidate").unwrap();

        let (report, text) = run(dir.path());
        let report = report.unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.orientations.total(), report.total);
        assert!(text.contains("✗ c.jpg: read failed - "));
        assert!(text.contains("✗ d.gif: read failed - "));
        assert!(text.contains("Total images: 2"));
        assert!(text.contains("Unreadable files skipped: 2"));
        assert!(!text.contains("notes.txt"));
    }

    #[test]
    fn test_empty_directory_has_nothing_to_analyze() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"# covers").unwrap();

        let (report, text) = run(dir.path());
        assert!(report.is_none());
        assert!(text.contains("Nothing to analyze"));
        assert!(!text.contains("Total images"));
    }

    #[test]
    fn test_only_unreadable_files_has_nothing_to_analyze() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.png"), b"nope").unwrap();

        let (report, text) = run(dir.path());
        assert!(report.is_none());
        assert!(text.contains("✗ broken.png: read failed - "));
        assert!(text.contains("Nothing to analyze"));
        assert!(!text.contains("Total images"));
    }

    #[test]
    fn test_missing_directory_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("epub_covers 2");

        let (report, text) = run(&missing);
        assert!(report.is_none());
        assert!(text.contains("Directory not found: "));
        assert!(text.contains("epub_covers 2"));
    }

    #[test]
    fn test_file_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cover.png");
        RgbImage::new(4, 4).save(&file).unwrap();

        let mut buf = Vec::new();
        let err = CoverAnalyzer::new(false)
            .analyze(&file, &mut buf)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalyzeError>(),
            Some(AnalyzeError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(640, 960).save(dir.path().join("one.jpg")).unwrap();
        RgbImage::new(700, 1000).save(dir.path().join("two.png")).unwrap();
        RgbImage::new(512, 512).save(dir.path().join("three.bmp")).unwrap();

        let (first, first_text) = run(dir.path());
        let (second, second_text) = run(dir.path());
        let (first, second) = (first.unwrap(), second.unwrap());

        assert_eq!(first.width, second.width);
        assert_eq!(first.height, second.height);
        assert_eq!(first.aspect_ratio, second.aspect_ratio);
        assert_eq!(first.orientations, second.orientations);
        assert_eq!(first_text, second_text);
    }
}
