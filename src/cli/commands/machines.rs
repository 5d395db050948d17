//! `bomplan machines` - distinct machine types available for filtering

use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::distinct_machines;

#[derive(clap::Args, Debug)]
pub struct MachinesArgs {
    /// BOM forecast CSV file
    pub file: PathBuf,
}

pub fn run(args: MachinesArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = super::load_dataset(&args.file, global)?;
    let names = distinct_machines(dataset.rows());
    super::print_name_list(&names, "machine type", global)
}
