//! bomplan: BOM requirement planner
//!
//! Parses a bill-of-materials forecast CSV and derives multi-year
//! component requirements for a chosen part across machine build
//! forecasts.

pub mod cli;
pub mod core;
