//! Core module - dataset parsing, selector index, requirement calculation,
//! planner state

pub mod calc;
pub mod dataset;
pub mod index;
pub mod state;

pub use calc::{
    compute, MachineFilter, RequirementResult, Selection, DEFAULT_YEARS, MAX_YEARS, MIN_YEARS,
};
pub use dataset::{BomRow, Dataset, DatasetError, MAX_FORECAST_YEARS};
pub use index::{distinct_components, distinct_machines};
pub use state::{Phase, Planner};
