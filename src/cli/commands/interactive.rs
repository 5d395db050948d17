//! `bomplan interactive` - prompt-driven planning session
//!
//! Owns the planner lifecycle: load or replace a dataset, adjust the
//! selection, view results, reset. Every selection change recomputes
//! before the next prompt is shown.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use super::plan::build_report;
use super::show::TableStyle;
use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::core::{
    distinct_components, distinct_machines, MachineFilter, Phase, Planner, MAX_YEARS, MIN_YEARS,
};

#[derive(clap::Args, Debug)]
pub struct InteractiveArgs {
    /// BOM forecast CSV file to load at startup
    pub file: Option<PathBuf>,
}

pub fn run(args: InteractiveArgs, global: &GlobalOpts) -> Result<()> {
    let mut planner = Planner::new();

    if let Some(path) = &args.file {
        let dataset = super::load_dataset(path, global)?;
        println!(
            "{} Loaded {} rows of BOM data",
            style("✓").green(),
            dataset.len()
        );
        planner = planner.load(dataset);
    }

    loop {
        match planner.phase() {
            Phase::Empty => {
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("No dataset loaded")
                    .items(&["Load BOM file", "Quit"])
                    .default(0)
                    .interact()
                    .into_diagnostic()?;

                match choice {
                    0 => planner = prompt_load(planner, global)?,
                    _ => return Ok(()),
                }
            }
            Phase::Loaded | Phase::Computed => {
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(menu_prompt(&planner))
                    .items(&[
                        "Select component",
                        "Select machine type",
                        "Set year horizon",
                        "Show full report",
                        "Load new BOM file",
                        "Reset",
                        "Quit",
                    ])
                    .default(0)
                    .interact()
                    .into_diagnostic()?;

                match choice {
                    0 => {
                        let components = distinct_components(planner.dataset().rows());
                        let index = Select::with_theme(&ColorfulTheme::default())
                            .with_prompt("Component")
                            .items(&components)
                            .default(0)
                            .interact()
                            .into_diagnostic()?;
                        planner.select_component(&components[index]);
                        print_result_panel(&planner);
                    }
                    1 => {
                        let machines = distinct_machines(planner.dataset().rows());
                        let mut items = vec!["All machines".to_string()];
                        items.extend(machines.iter().cloned());
                        let index = Select::with_theme(&ColorfulTheme::default())
                            .with_prompt("Machine type")
                            .items(&items)
                            .default(0)
                            .interact()
                            .into_diagnostic()?;
                        let filter = if index == 0 {
                            MachineFilter::All
                        } else {
                            MachineFilter::Machine(machines[index - 1].clone())
                        };
                        planner.select_machine(filter);
                        print_result_panel(&planner);
                    }
                    2 => {
                        let years: u8 = Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(format!("Year horizon ({}-{})", MIN_YEARS, MAX_YEARS))
                            .default(planner.selection().years)
                            .validate_with(|y: &u8| {
                                if (MIN_YEARS..=MAX_YEARS).contains(y) {
                                    Ok(())
                                } else {
                                    Err("enter a value between 1 and 10")
                                }
                            })
                            .interact_text()
                            .into_diagnostic()?;
                        planner.set_years(years);
                        print_result_panel(&planner);
                    }
                    3 => match planner.result() {
                        Some(result) => print!(
                            "{}",
                            build_report(
                                planner.dataset().rows(),
                                planner.selection(),
                                result,
                                true,
                                TableStyle::Terminal,
                            )
                        ),
                        None => println!("Nothing to report yet: select a component first."),
                    },
                    4 => planner = prompt_load(planner, global)?,
                    5 => {
                        planner = planner.reset();
                        println!("{} Dataset and selections cleared", style("✓").green());
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

fn menu_prompt(planner: &Planner) -> String {
    let selection = planner.selection();
    if selection.component.is_empty() {
        format!("{} rows loaded", planner.dataset().len())
    } else {
        format!(
            "{} rows loaded | {} / {} / {} yr",
            planner.dataset().len(),
            truncate_str(&selection.component, 24),
            truncate_str(&selection.machine.to_string(), 24),
            selection.years
        )
    }
}

/// Prompt for a replacement file. Only `.csv`-named files are accepted
/// here; refusing leaves the current dataset untouched.
fn prompt_load(planner: Planner, global: &GlobalOpts) -> Result<Planner> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Path to BOM file")
        .interact_text()
        .into_diagnostic()?;

    if !path.ends_with(".csv") {
        println!("{} Not a .csv file, keeping current data", style("!").yellow());
        return Ok(planner);
    }

    match super::load_dataset(&PathBuf::from(&path), global) {
        Ok(dataset) => {
            println!(
                "{} Loaded {} rows of BOM data",
                style("✓").green(),
                dataset.len()
            );
            Ok(planner.load(dataset))
        }
        Err(e) => {
            println!("{} {}", style("✗").red(), e);
            Ok(planner)
        }
    }
}

fn print_result_panel(planner: &Planner) {
    match planner.result() {
        Some(result) => {
            println!();
            print!(
                "{}",
                build_report(
                    planner.dataset().rows(),
                    planner.selection(),
                    result,
                    false,
                    TableStyle::Terminal,
                )
            );
        }
        None if !planner.selection().component.is_empty() => {
            println!("No rows match the current selection.");
        }
        None => {}
    }
}
