//! `bomplan plan` - compute component requirements over a year horizon

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use super::show::{render_table, TableStyle};
use crate::cli::chart;
use crate::cli::helpers::{group_digits, pluralize_years};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{
    compute, distinct_components, distinct_machines, BomRow, MachineFilter, RequirementResult,
    Selection, DEFAULT_YEARS,
};

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// BOM forecast CSV file
    pub file: PathBuf,

    /// Component to plan for
    #[arg(long, short = 'c')]
    pub component: Option<String>,

    /// Machine type to restrict to ("all" keeps every type)
    #[arg(long, short = 'm', default_value = "all")]
    pub machine: MachineFilter,

    /// Year horizon
    #[arg(
        long,
        short = 'y',
        default_value_t = DEFAULT_YEARS,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    pub years: u8,

    /// Output report to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Skip the data table at the end of the report
    #[arg(long)]
    pub no_table: bool,
}

pub fn run(args: PlanArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = super::load_dataset(&args.file, global)?;

    let selection = Selection::new(
        args.component.clone().unwrap_or_default(),
        args.machine.clone(),
        args.years,
    );

    let Some(result) = compute(dataset.rows(), &selection) else {
        // Not an error: an empty or unmatched selection just suppresses
        // the report.
        print_no_result_hint(dataset.rows(), &selection, global);
        return Ok(());
    };

    match global.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "selection": selection,
                "result": result,
            });
            let mut content = serde_json::to_string_pretty(&payload).into_diagnostic()?;
            content.push('\n');
            super::write_output(&content, args.output)
        }
        OutputFormat::Csv => {
            let content = series_csv(&result)?;
            super::write_output(&content, args.output)
        }
        OutputFormat::Md => {
            let content = build_report(
                dataset.rows(),
                &selection,
                &result,
                !args.no_table,
                TableStyle::Markdown,
            );
            super::write_output(&content, args.output)
        }
        OutputFormat::Auto | OutputFormat::Text => {
            let content = build_report(
                dataset.rows(),
                &selection,
                &result,
                !args.no_table,
                TableStyle::Terminal,
            );
            super::write_output(&content, args.output)
        }
    }
}

/// The result sentence of the summary panel.
pub(crate) fn summary_sentence(selection: &Selection, result: &RequirementResult) -> String {
    let machine_text = match &selection.machine {
        MachineFilter::All => format!(
            "{} machines (across all types)",
            group_digits(result.total_machines)
        ),
        MachineFilter::Machine(name) => {
            format!("{} {}", group_digits(result.total_machines), name)
        }
    };

    format!(
        "You need {} units of {} to manufacture {} over the next {}.",
        group_digits(result.total_components),
        selection.component,
        machine_text,
        pluralize_years(selection.years),
    )
}

/// Assemble the full text report: sentence, summary statistics, yearly
/// bar chart, and optionally the highlighted data table.
pub(crate) fn build_report(
    rows: &[BomRow],
    selection: &Selection,
    result: &RequirementResult,
    include_table: bool,
    table_style: TableStyle,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Component Requirement Plan: {}\n\n",
        selection.component
    ));
    output.push_str(&summary_sentence(selection, result));
    output.push_str("\n\n");

    output.push_str(&format!(
        "Total components: {}\n",
        group_digits(result.total_components)
    ));
    output.push_str(&format!(
        "Average per year: {}\n",
        group_digits(result.avg_per_year)
    ));
    output.push_str(&format!(
        "Peak requirement: {}\n",
        group_digits(result.peak_requirement)
    ));
    output.push_str(&format!(
        "Total machines:   {}\n\n",
        group_digits(result.total_machines)
    ));

    output.push_str("```\n");
    output.push_str(&chart::render(&result.yearly_requirements));
    output.push_str("```\n");

    if include_table {
        output.push('\n');
        output.push_str(&render_table(rows, Some(result), table_style));
    }

    output
}

/// Year-indexed chart series as CSV.
fn series_csv(result: &RequirementResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["year", "machines", "components"])
        .into_diagnostic()?;
    for (index, (requirement, machines)) in result
        .yearly_requirements
        .iter()
        .zip(&result.yearly_machines)
        .enumerate()
    {
        wtr.write_record([
            (index + 1).to_string(),
            machines.to_string(),
            requirement.to_string(),
        ])
        .into_diagnostic()?;
    }
    let buf = wtr.into_inner().into_diagnostic()?;
    String::from_utf8(buf).into_diagnostic()
}

fn print_no_result_hint(rows: &[BomRow], selection: &Selection, global: &GlobalOpts) {
    if global.quiet {
        return;
    }

    if selection.component.is_empty() {
        println!("No component selected. Pick one with --component:");
    } else {
        match &selection.machine {
            MachineFilter::All => println!(
                "No rows match component {}. Available components:",
                style(&selection.component).cyan()
            ),
            MachineFilter::Machine(name) => {
                println!(
                    "No rows match component {} on machine type {}.",
                    style(&selection.component).cyan(),
                    style(name).cyan()
                );
                println!("Available machine types:");
                for machine in distinct_machines(rows) {
                    println!("  {}", machine);
                }
                println!("Available components:");
            }
        }
    }

    for component in distinct_components(rows) {
        println!("  {}", component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dataset;

    fn computed() -> (Dataset, Selection, RequirementResult) {
        let dataset = Dataset::parse("h\nM1,Widget,2,10,20\nM2,Widget,3,5,5\n");
        let selection = Selection::new("Widget", MachineFilter::All, 2);
        let result = compute(dataset.rows(), &selection).unwrap();
        (dataset, selection, result)
    }

    #[test]
    fn test_summary_sentence_all_machines() {
        let (_, selection, result) = computed();
        assert_eq!(
            summary_sentence(&selection, &result),
            "You need 90 units of Widget to manufacture 40 machines (across all types) over the next 2 years."
        );
    }

    #[test]
    fn test_summary_sentence_single_machine() {
        let dataset = Dataset::parse("h\nM1,Widget,2,10,20\nM2,Widget,3,5,5\n");
        let selection = Selection::new("Widget", MachineFilter::Machine("M1".to_string()), 1);
        let result = compute(dataset.rows(), &selection).unwrap();

        assert_eq!(
            summary_sentence(&selection, &result),
            "You need 20 units of Widget to manufacture 10 M1 over the next 1 year."
        );
    }

    #[test]
    fn test_build_report_contains_all_sections() {
        let (dataset, selection, result) = computed();
        let report = build_report(
            dataset.rows(),
            &selection,
            &result,
            true,
            TableStyle::Markdown,
        );

        assert!(report.starts_with("# Component Requirement Plan: Widget"));
        assert!(report.contains("Total components: 90"));
        assert!(report.contains("Average per year: 45"));
        assert!(report.contains("Peak requirement: 55"));
        assert!(report.contains("Total machines:   40"));
        assert!(report.contains("Year 1"));
        assert!(report.contains("Year 2"));
        assert!(report.contains("MACHINE TYPE"));
    }

    #[test]
    fn test_build_report_can_skip_table() {
        let (dataset, selection, result) = computed();
        let report = build_report(
            dataset.rows(),
            &selection,
            &result,
            false,
            TableStyle::Terminal,
        );
        assert!(!report.contains("MACHINE TYPE"));
    }

    #[test]
    fn test_series_csv_is_year_indexed() {
        let (_, _, result) = computed();
        let csv = series_csv(&result).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "year,machines,components");
        assert_eq!(lines[1], "1,15,35");
        assert_eq!(lines[2], "2,25,55");
    }
}
