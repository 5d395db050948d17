//! `bomplan export` - re-emit the normalized row set as CSV
//!
//! Short lines and unparseable numbers from the input are already gone by
//! this point; the output is the parsed rows under the canonical header.

use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// BOM forecast CSV file
    pub file: PathBuf,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = super::load_dataset(&args.file, global)?;
    super::write_output(&dataset.to_csv(), args.output)
}
