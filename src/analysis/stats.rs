use std::collections::BTreeSet;
use std::fmt;

use super::record::{DecodeError, ImageRecord};

/// Upper bound (exclusive) of the portrait bucket
pub const PORTRAIT_MAX_RATIO: f64 = 0.8;
/// Lower bound (exclusive) of the landscape bucket
pub const LANDSCAPE_MIN_RATIO: f64 = 1.2;
/// Below this minimum ratio the collection is considered to hold tall covers
pub const TALL_COVER_RATIO: f64 = 0.7;
/// Fixed container ratio offered as an alternative with extra margin
pub const MARGIN_CONTAINER_RATIO: f64 = 0.7;
/// Fallback container ratio offered when tall covers are present
pub const CONSERVATIVE_CONTAINER_RATIO: f64 = 0.65;
/// Number of narrowest and widest covers listed as examples
pub const EXAMPLE_COUNT: usize = 3;

/// Min, max, arithmetic mean and median of a set of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl Summary {
    /// Returns `None` for an empty input
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            mean: sorted.iter().sum::<f64>() / n as f64,
            median,
        })
    }
}

/// Orientation bucket of an image, by aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// ratio < 0.8
    Portrait,
    /// 0.8 <= ratio <= 1.2
    Square,
    /// ratio > 1.2
    Landscape,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Portrait,
        Orientation::Square,
        Orientation::Landscape,
    ];

    pub fn classify(aspect_ratio: f64) -> Self {
        if aspect_ratio < PORTRAIT_MAX_RATIO {
            Orientation::Portrait
        } else if aspect_ratio <= LANDSCAPE_MIN_RATIO {
            Orientation::Square
        } else {
            Orientation::Landscape
        }
    }

    pub fn range_description(&self) -> &'static str {
        match self {
            Orientation::Portrait => "ratio < 0.8",
            Orientation::Square => "0.8 <= ratio <= 1.2",
            Orientation::Landscape => "ratio > 1.2",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Portrait => "Portrait",
            Orientation::Square => "Square",
            Orientation::Landscape => "Landscape",
        };
        f.write_str(name)
    }
}

/// Number of images in each orientation bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrientationCounts {
    pub portrait: usize,
    pub square: usize,
    pub landscape: usize,
}

impl OrientationCounts {
    pub fn from_ratios(ratios: &[f64]) -> Self {
        let mut counts = Self::default();
        for &ratio in ratios {
            match Orientation::classify(ratio) {
                Orientation::Portrait => counts.portrait += 1,
                Orientation::Square => counts.square += 1,
                Orientation::Landscape => counts.landscape += 1,
            }
        }
        counts
    }

    pub fn get(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Square => self.square,
            Orientation::Landscape => self.landscape,
        }
    }

    pub fn total(&self) -> usize {
        self.portrait + self.square + self.landscape
    }

    /// Share of the bucket in percent (0.0 when there are no images)
    pub fn percentage(&self, orientation: Orientation) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.get(orientation) as f64 / total as f64 * 100.0
        }
    }
}

/// A candidate file that could not be read
#[derive(Debug)]
pub struct ExtractionFailure {
    pub filename: String,
    pub error: DecodeError,
}

/// Aggregate statistics over every successfully read image
#[derive(Debug)]
pub struct AnalysisReport {
    pub total: usize,
    pub formats: BTreeSet<String>,
    pub width: Summary,
    pub height: Summary,
    pub aspect_ratio: Summary,
    pub orientations: OrientationCounts,
    /// Smallest ratios, ascending
    pub narrowest: Vec<ImageRecord>,
    /// Largest ratios, ascending
    pub widest: Vec<ImageRecord>,
    pub failures: Vec<ExtractionFailure>,
}

impl AnalysisReport {
    /// Aggregate `records`; `None` when there is nothing to analyze
    pub fn from_records(
        records: &[ImageRecord],
        failures: Vec<ExtractionFailure>,
    ) -> Option<Self> {
        let widths: Vec<f64> = records.iter().map(|r| r.width as f64).collect();
        let heights: Vec<f64> = records.iter().map(|r| r.height as f64).collect();
        let ratios: Vec<f64> = records.iter().map(|r| r.aspect_ratio).collect();

        let width = Summary::from_values(&widths)?;
        let height = Summary::from_values(&heights)?;
        let aspect_ratio = Summary::from_values(&ratios)?;

        // Stable sort, ties keep discovery order
        let mut by_ratio: Vec<&ImageRecord> = records.iter().collect();
        by_ratio.sort_by(|a, b| a.aspect_ratio.total_cmp(&b.aspect_ratio));

        let take = EXAMPLE_COUNT.min(by_ratio.len());
        let narrowest = by_ratio[..take].iter().map(|r| (*r).clone()).collect();
        let widest = by_ratio[by_ratio.len() - take..]
            .iter()
            .map(|r| (*r).clone())
            .collect();

        Some(Self {
            total: records.len(),
            formats: records.iter().map(|r| r.format.clone()).collect(),
            width,
            height,
            aspect_ratio,
            orientations: OrientationCounts::from_ratios(&ratios),
            narrowest,
            widest,
            failures,
        })
    }

    /// Container ratio under which every analyzed cover fits uncropped
    pub fn suggested_container_ratio(&self) -> f64 {
        self.aspect_ratio.min
    }

    pub fn has_tall_covers(&self) -> bool {
        self.aspect_ratio.min < TALL_COVER_RATIO
    }
}
