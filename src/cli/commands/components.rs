//! `bomplan components` - distinct component names available for planning

use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::distinct_components;

#[derive(clap::Args, Debug)]
pub struct ComponentsArgs {
    /// BOM forecast CSV file
    pub file: PathBuf,
}

pub fn run(args: ComponentsArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = super::load_dataset(&args.file, global)?;
    let names = distinct_components(dataset.rows());
    super::print_name_list(&names, "component", global)
}
