//! `bomplan show` - render the parsed BOM table

use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::group_digits;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{
    compute, BomRow, MachineFilter, RequirementResult, Selection, MIN_YEARS, MAX_FORECAST_YEARS,
};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// BOM forecast CSV file
    pub file: PathBuf,

    /// Highlight rows for this component
    #[arg(long, short = 'c')]
    pub component: Option<String>,

    /// Restrict the highlight to one machine type ("all" keeps every type)
    #[arg(long, short = 'm', default_value = "all")]
    pub machine: MachineFilter,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Visual style for the rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableStyle {
    Terminal,
    Markdown,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = super::load_dataset(&args.file, global)?;

    // The highlight subset only depends on the filter, so the shortest
    // horizon works for matching.
    let highlight = args.component.as_ref().and_then(|component| {
        compute(
            dataset.rows(),
            &Selection::new(component.clone(), args.machine.clone(), MIN_YEARS),
        )
    });

    let content = match global.format {
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(dataset.rows()).into_diagnostic()?;
            text.push('\n');
            text
        }
        OutputFormat::Csv => dataset.to_csv(),
        OutputFormat::Md => render_table(dataset.rows(), highlight.as_ref(), TableStyle::Markdown),
        OutputFormat::Auto | OutputFormat::Text => {
            render_table(dataset.rows(), highlight.as_ref(), TableStyle::Terminal)
        }
    };

    super::write_output(&content, args.output)
}

/// Render the row set as a table, marking highlighted rows with "▸".
pub(crate) fn render_table(
    rows: &[BomRow],
    highlight: Option<&RequirementResult>,
    style: TableStyle,
) -> String {
    let mut header: Vec<String> = vec![
        String::new(),
        "MACHINE TYPE".to_string(),
        "COMPONENT".to_string(),
        "QTY/MACHINE".to_string(),
    ];
    header.extend((1..=MAX_FORECAST_YEARS).map(|year| format!("YR{}", year)));
    let columns = header.len();

    let mut builder = Builder::default();
    builder.push_record(header);

    for (index, row) in rows.iter().enumerate() {
        let marker = match highlight {
            Some(result) if result.is_matched(index) => "▸",
            _ => "",
        };
        let mut record: Vec<String> = vec![
            marker.to_string(),
            row.machine_type.clone(),
            row.component.clone(),
            row.qty_per_machine.to_string(),
        ];
        record.extend(
            row.forecasts
                .iter()
                .map(|f| group_digits(u64::from(*f))),
        );
        record.resize(columns, String::new());
        builder.push_record(record);
    }

    let mut table = builder.build();
    match style {
        TableStyle::Markdown => table.with(Style::markdown()),
        TableStyle::Terminal => table.with(Style::sharp()),
    };

    let mut out = table.to_string();
    out.push('\n');
    out
}
