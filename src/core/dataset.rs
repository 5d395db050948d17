//! BOM forecast dataset - row parsing and normalized re-export
//!
//! The input dialect is deliberately primitive: lines split on bare commas,
//! no quoting or escaping of embedded delimiters. Spreadsheet exports that
//! quote fields are not honored on the read path, so the writer disables
//! quoting as well to keep `to_csv` and `parse` symmetric.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Forecast columns consumed from any single row. Columns beyond the tenth
/// forecast year are discarded.
pub const MAX_FORECAST_YEARS: usize = 10;

/// Minimum raw fields for a line to count as a data row
/// (machine type, component, quantity, at least one forecast).
const MIN_FIELDS: usize = 4;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read BOM file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One line item of a BOM forecast: a part consumed by one machine model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomRow {
    /// Machine model this line belongs to
    pub machine_type: String,

    /// Part identifier
    pub component: String,

    /// Parts consumed per machine built
    pub qty_per_machine: u32,

    /// Planned machine builds, index 0 = year 1; at most ten entries.
    /// Missing trailing columns shorten the sequence, they are not
    /// zero-filled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forecasts: Vec<u32>,
}

/// An immutable set of parsed BOM rows. Each load replaces the set
/// wholesale; rows are never merged incrementally.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<BomRow>,
    skipped_lines: usize,
}

impl Dataset {
    /// Parse raw delimited text into a row set.
    ///
    /// The first line is a header and is discarded without validation.
    /// Every field is trimmed. Lines with fewer than four fields are
    /// dropped; unparseable quantity and forecast fields count as zero,
    /// so no row is ever rejected for bad numbers.
    pub fn parse(text: &str) -> Self {
        let mut rows = Vec::new();
        let mut skipped_lines = 0;

        for line in text.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < MIN_FIELDS {
                skipped_lines += 1;
                continue;
            }

            let forecast_end = fields.len().min(MIN_FIELDS - 1 + MAX_FORECAST_YEARS);
            rows.push(BomRow {
                machine_type: fields[0].to_string(),
                component: fields[1].to_string(),
                qty_per_machine: parse_count(fields[2]),
                forecasts: fields[3..forecast_end].iter().copied().map(parse_count).collect(),
            });
        }

        Self {
            rows,
            skipped_lines,
        }
    }

    /// Read and parse a BOM file.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn rows(&self) -> &[BomRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lines dropped during the last parse for having fewer than four fields.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Re-emit the normalized rows under the canonical header.
    ///
    /// Output re-parses to the same numeric fields. Quoting stays disabled
    /// to match the reader's dialect.
    pub fn to_csv(&self) -> String {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(Vec::new());

        let mut header: Vec<String> = vec![
            "machine_type".to_string(),
            "component".to_string(),
            "qty_per_machine".to_string(),
        ];
        header.extend((1..=MAX_FORECAST_YEARS).map(|year| format!("yr{}", year)));
        let _ = wtr.write_record(&header);

        for row in &self.rows {
            let mut record: Vec<String> = vec![
                row.machine_type.clone(),
                row.component.clone(),
                row.qty_per_machine.to_string(),
            ];
            record.extend(row.forecasts.iter().map(|f| f.to_string()));
            let _ = wtr.write_record(&record);
        }

        String::from_utf8(wtr.into_inner().unwrap_or_default()).unwrap_or_default()
    }
}

/// Integer parse with zero fallback. Negative values fail the unsigned
/// parse and coerce to zero, which keeps every stored count non-negative.
fn parse_count(field: &str) -> u32 {
    field.parse().unwrap_or(0)
}
