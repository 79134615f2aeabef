// Library exports for reuse by the binary and tests
pub mod analysis;
pub mod cli;
pub mod utils;

// Re-export commonly used types
pub use analysis::{
    AnalysisReport, AnalyzeError, CoverAnalyzer, DecodeError, ImageRecord, Orientation,
    OrientationCounts, Summary,
};
