//! Requirement calculation over a filtered row set

use serde::{Deserialize, Serialize};

use crate::core::dataset::BomRow;

/// Year horizon bounds (the slider range of the selection controls).
pub const MIN_YEARS: u8 = 1;
pub const MAX_YEARS: u8 = 10;
pub const DEFAULT_YEARS: u8 = 5;

/// Machine filter: every machine type, or one exact model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MachineFilter {
    All,
    Machine(String),
}

impl Default for MachineFilter {
    fn default() -> Self {
        MachineFilter::All
    }
}

impl MachineFilter {
    pub fn matches(&self, row: &BomRow) -> bool {
        match self {
            MachineFilter::All => true,
            MachineFilter::Machine(name) => row.machine_type == *name,
        }
    }
}

impl From<String> for MachineFilter {
    fn from(s: String) -> Self {
        if s == "all" {
            MachineFilter::All
        } else {
            MachineFilter::Machine(s)
        }
    }
}

impl From<MachineFilter> for String {
    fn from(filter: MachineFilter) -> Self {
        filter.to_string()
    }
}

impl std::fmt::Display for MachineFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineFilter::All => write!(f, "all"),
            MachineFilter::Machine(name) => write!(f, "{}", name),
        }
    }
}

impl std::str::FromStr for MachineFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MachineFilter::from(s.to_string()))
    }
}

/// Active filter selections. A single instance lives in the planner and is
/// reset whenever a new dataset is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Chosen component; empty means none chosen yet
    pub component: String,

    /// Machine-type restriction
    pub machine: MachineFilter,

    /// Year horizon, 1-10
    pub years: u8,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            component: String::new(),
            machine: MachineFilter::All,
            years: DEFAULT_YEARS,
        }
    }
}

impl Selection {
    pub fn new(component: impl Into<String>, machine: MachineFilter, years: u8) -> Self {
        Self {
            component: component.into(),
            machine,
            years: years.clamp(MIN_YEARS, MAX_YEARS),
        }
    }

    /// Set the horizon, clamping out-of-range values to the slider bounds.
    pub fn set_years(&mut self, years: u8) {
        self.years = years.clamp(MIN_YEARS, MAX_YEARS);
    }
}

/// Derived requirement figures, recomputed from scratch on every selection
/// change and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementResult {
    /// Component units needed per year, length = horizon
    pub yearly_requirements: Vec<u64>,

    /// Machine builds per year across the matched rows
    pub yearly_machines: Vec<u64>,

    pub total_components: u64,
    pub total_machines: u64,

    /// Rounded mean of the yearly requirements (half rounds up)
    pub avg_per_year: u64,

    /// Largest single-year requirement
    pub peak_requirement: u64,

    /// Indices into the row set of the rows that matched the filter,
    /// in ascending order
    pub matched: Vec<usize>,
}

impl RequirementResult {
    /// Highlight predicate over the full data table.
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.binary_search(&index).is_ok()
    }
}

/// Compute per-year and aggregate requirements for the current selection.
///
/// Returns `None` when no component is chosen or the filter matches no
/// rows; the caller suppresses its results panel rather than treating
/// either case as an error. Pure: identical inputs always produce an
/// identical result.
pub fn compute(rows: &[BomRow], selection: &Selection) -> Option<RequirementResult> {
    if selection.component.is_empty() {
        return None;
    }

    let matched: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.component == selection.component)
        .filter(|(_, row)| selection.machine.matches(row))
        .map(|(index, _)| index)
        .collect();

    if matched.is_empty() {
        return None;
    }

    let years = usize::from(selection.years.clamp(MIN_YEARS, MAX_YEARS));
    let mut yearly_requirements = Vec::with_capacity(years);
    let mut yearly_machines = Vec::with_capacity(years);

    for year in 0..years {
        let mut units: u64 = 0;
        let mut machines: u64 = 0;
        for &index in &matched {
            let row = &rows[index];
            // A horizon longer than the row's forecast reads as zero builds.
            let forecast = u64::from(row.forecasts.get(year).copied().unwrap_or(0));
            units += u64::from(row.qty_per_machine) * forecast;
            machines += forecast;
        }
        yearly_requirements.push(units);
        yearly_machines.push(machines);
    }

    let total_components: u64 = yearly_requirements.iter().sum();
    let total_machines: u64 = yearly_machines.iter().sum();
    let avg_per_year = (total_components as f64 / years as f64).round() as u64;
    let peak_requirement = yearly_requirements.iter().copied().max().unwrap_or(0);

    Some(RequirementResult {
        yearly_requirements,
        yearly_machines,
        total_components,
        total_machines,
        avg_per_year,
        peak_requirement,
        matched,
    })
}
