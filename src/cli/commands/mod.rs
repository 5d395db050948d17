//! Command implementations

pub mod completions;
pub mod components;
pub mod export;
pub mod interactive;
pub mod machines;
pub mod plan;
pub mod show;

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Dataset;

/// Read and parse a BOM file. Dropped lines never fail the run; they are
/// reported on stderr under --verbose.
pub(crate) fn load_dataset(path: &Path, global: &GlobalOpts) -> Result<Dataset> {
    let dataset = Dataset::from_path(path).map_err(|e| miette::miette!("{}", e))?;

    if global.verbose && dataset.skipped_lines() > 0 {
        eprintln!(
            "{} {} line(s) with fewer than 4 fields dropped",
            style("!").yellow(),
            dataset.skipped_lines()
        );
    }

    Ok(dataset)
}

pub(crate) fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Print a sorted name list in the selected format. `label` names the kind
/// of thing listed ("component", "machine type") for the summary line and
/// the CSV/Markdown header.
pub(crate) fn print_name_list(names: &[String], label: &str, global: &GlobalOpts) -> Result<()> {
    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(names).into_diagnostic()?
            );
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record([&label.replace(' ', "_")]).into_diagnostic()?;
            for name in names {
                wtr.write_record([name]).into_diagnostic()?;
            }
            wtr.flush().into_diagnostic()?;
        }
        OutputFormat::Md => {
            println!("| {} |", label);
            println!("|---|");
            for name in names {
                println!("| {} |", name.replace('|', "\\|"));
            }
        }
        OutputFormat::Text => {
            for name in names {
                println!("{}", name);
            }
        }
        OutputFormat::Auto => {
            for name in names {
                println!("{}", name);
            }
            if !global.quiet {
                println!();
                println!("{} {}(s) found", style(names.len()).cyan(), label);
            }
        }
    }
    Ok(())
}
