use anyhow::Result;
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::process::ExitCode;

use cover_analyzer::cli::Args;
use cover_analyzer::utils::{error_println, verbose_println, warn_println};
use cover_analyzer::CoverAnalyzer;

fn run(args: &Args) -> Result<()> {
    // Print banner
    println!("{}", style("Cover Analyzer").bold().blue());
    println!("{}", style("Cover image dimensions and aspect ratios").dim());
    println!();

    verbose_println(args.verbose, &format!("Input directory: {}", args.directory.display()));

    let analyzer = CoverAnalyzer::new(args.verbose);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match analyzer.analyze(&args.directory, &mut out)? {
        Some(report) if !report.failures.is_empty() => {
            out.flush()?;
            warn_println(&format!(
                "{} file(s) could not be read and were excluded",
                report.failures.len()
            ));
        }
        Some(_) => {}
        None => verbose_println(args.verbose, "No statistics produced"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error_println(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
