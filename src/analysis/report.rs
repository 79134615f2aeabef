//! Text rendering of the analysis.
//!
//! Everything is written to a caller-supplied sink so the binary can target
//! stdout while tests capture the output in memory.

use console::style;
use prettytable::{format, Cell, Row, Table};
use std::io::{self, Write};
use std::path::Path;

use super::record::ImageRecord;
use super::stats::{
    AnalysisReport, ExtractionFailure, Orientation, Summary, CONSERVATIVE_CONTAINER_RATIO,
    MARGIN_CONTAINER_RATIO,
};

const RULE_WIDTH: usize = 60;

/// One line for a successfully read image
pub fn write_record_line<W: Write + ?Sized>(out: &mut W, record: &ImageRecord) -> io::Result<()> {
    writeln!(
        out,
        "{} {}: {}x{} (ratio: {:.3})",
        style("✓").green(),
        record.filename,
        record.width,
        record.height,
        record.aspect_ratio
    )
}

/// One line for a file that could not be read
pub fn write_failure_line<W: Write + ?Sized>(
    out: &mut W,
    failure: &ExtractionFailure,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}: read failed - {}",
        style("✗").red(),
        failure.filename,
        failure.error
    )
}

pub fn write_directory_not_found<W: Write + ?Sized>(out: &mut W, dir: &Path) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style(format!("Directory not found: {}", dir.display())).red()
    )
}

pub fn write_nothing_to_analyze<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", style("Nothing to analyze: no readable image files found").yellow())
}

/// Full statistics section, recommendations and examples
pub fn write_report<W: Write + ?Sized>(out: &mut W, report: &AnalysisReport) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", style("Cover Image Dimension Report").bold().cyan())?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "Total images: {}", report.total)?;
    let formats: Vec<&str> = report.formats.iter().map(String::as_str).collect();
    writeln!(out, "Formats: {}", formats.join(", "))?;
    if !report.failures.is_empty() {
        writeln!(
            out,
            "Unreadable files skipped: {}",
            style(report.failures.len()).red()
        )?;
    }

    write_dimension_section(out, "Width", &report.width)?;
    write_dimension_section(out, "Height", &report.height)?;

    writeln!(out)?;
    writeln!(out, "{}", style("Aspect ratio (width / height):").bold())?;
    writeln!(out, "  Min: {:.3}", report.aspect_ratio.min)?;
    writeln!(out, "  Max: {:.3}", report.aspect_ratio.max)?;
    writeln!(out, "  Mean: {:.3}", report.aspect_ratio.mean)?;
    writeln!(out, "  Median: {:.3}", report.aspect_ratio.median)?;

    write_orientation_table(out, report)?;

    writeln!(out)?;
    writeln!(out, "{}", style("Recommended cover ratio:").bold())?;
    writeln!(out, "  Based on median: {:.3}", report.aspect_ratio.median)?;
    writeln!(out, "  Based on mean: {:.3}", report.aspect_ratio.mean)?;

    let suggested = report.suggested_container_ratio();
    writeln!(out)?;
    writeln!(out, "{}", style("Compatibility:").bold())?;
    writeln!(
        out,
        "  Ratio range: {:.3} - {:.3}",
        report.aspect_ratio.min, report.aspect_ratio.max
    )?;
    writeln!(
        out,
        "  Suggested container ratio: {:.3} (every cover fits without cropping)",
        suggested
    )?;
    writeln!(
        out,
        "  Alternative: {} (rounded down for extra margin)",
        MARGIN_CONTAINER_RATIO
    )?;

    writeln!(out)?;
    writeln!(out, "{}", style("Recommendation:").bold())?;
    if report.has_tall_covers() {
        writeln!(
            out,
            "  Tall portrait covers present (smallest ratio: {:.3})",
            report.aspect_ratio.min
        )?;
        writeln!(
            out,
            "  Set the cover container ratio to: {}",
            style(format!("{:.3}", suggested)).bold().green()
        )?;
        writeln!(
            out,
            "  Or use the more conservative: {}",
            CONSERVATIVE_CONTAINER_RATIO
        )?;
    } else {
        writeln!(out, "  All cover ratios are within a reasonable range")?;
        writeln!(
            out,
            "  Set the cover container ratio to: {}",
            style(format!("{:.3}", suggested)).bold().green()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", style("Examples:").bold())?;
    writeln!(out, "  Narrowest covers:")?;
    for record in &report.narrowest {
        write_example_line(out, record)?;
    }
    writeln!(out, "  Widest covers:")?;
    for record in &report.widest {
        write_example_line(out, record)?;
    }

    Ok(())
}

fn write_dimension_section<W: Write + ?Sized>(
    out: &mut W,
    label: &str,
    summary: &Summary,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(format!("{}:", label)).bold())?;
    writeln!(out, "  Min: {}px", summary.min)?;
    writeln!(out, "  Max: {}px", summary.max)?;
    writeln!(out, "  Mean: {:.1}px", summary.mean)?;
    writeln!(out, "  Median: {:.1}px", summary.median)
}

fn write_orientation_table<W: Write + ?Sized>(
    out: &mut W,
    report: &AnalysisReport,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Orientation distribution:").bold())?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.add_row(Row::new(vec![
        Cell::new("Orientation"),
        Cell::new("Range"),
        Cell::new("Covers"),
        Cell::new("Share"),
    ]));

    for orientation in Orientation::ALL {
        table.add_row(Row::new(vec![
            Cell::new(&orientation.to_string()),
            Cell::new(orientation.range_description()),
            Cell::new(&report.orientations.get(orientation).to_string()),
            Cell::new(&format!(
                "{:.1}%",
                report.orientations.percentage(orientation)
            )),
        ]));
    }

    table.print(out)?;
    Ok(())
}

fn write_example_line<W: Write + ?Sized>(out: &mut W, record: &ImageRecord) -> io::Result<()> {
    writeln!(
        out,
        "    {}: {}x{} (ratio: {:.3})",
        record.filename, record.width, record.height, record.aspect_ratio
    )
}
