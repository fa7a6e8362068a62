//! Interactive BAW filter designer.
//!
//! Thin menu loop over the library: import resonator CSVs, design a
//! ladder or lattice filter, report quality metrics, save the combined
//! response. Every failure is printed and control returns to the menu.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use baw_filter::prelude::*;

#[derive(Parser)]
#[command(
    name = "baw_designer",
    about = "BAW resonator filter designer — admittance cascading and Q extraction"
)]
struct Cli {
    /// Resonator CSV files to import before the menu starts.
    #[arg(value_name = "CSV")]
    resonators: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut store = ResonatorStore::new();
    let mut response: Option<FilterResponse> = None;

    for path in &cli.resonators {
        import(&mut store, path);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(command) = read_line(&mut lines)? else {
            break;
        };
        match command.trim() {
            "1" => {
                if let Some(path) = prompt(&mut lines, "Enter path to .csv file: ")? {
                    import(&mut store, Path::new(path.trim()));
                }
            }
            "2" => list_resonators(&store),
            "3" => design(&store, Topology::Ladder, &mut response),
            "4" => design(&store, Topology::Lattice, &mut response),
            "5" => report_metrics(response.as_ref()),
            "6" => {
                if let Some(path) = prompt(&mut lines, "Enter output file name (e.g., results.csv): ")? {
                    save(response.as_ref(), Path::new(path.trim()));
                }
            }
            "7" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid command. Please try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("BAW Filter Designer");
    println!("===================");
    println!("1. Import resonator .csv file");
    println!("2. List imported resonators");
    println!("3. Design ladder filter");
    println!("4. Design lattice filter");
    println!("5. Report quality metrics");
    println!("6. Save results");
    println!("7. Exit");
    print!("Enter command number: ");
    let _ = io::stdout().flush();
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    read_line(lines)
}

fn import(store: &mut ResonatorStore, path: &Path) {
    match import_csv(path) {
        Ok(curve) => {
            let id = store.add(curve);
            info!("imported {} from {}", id, path.display());
            println!("{id} imported successfully from {}.", path.display());
        }
        Err(e) => {
            warn!("import of {} failed: {e}", path.display());
            println!("Error importing file: {e}");
        }
    }
}

fn list_resonators(store: &ResonatorStore) {
    if store.is_empty() {
        println!("No resonators imported.");
        return;
    }
    println!("Imported Resonators:");
    for resonator in store.iter() {
        println!("- {} ({} samples)", resonator.id(), resonator.curve().len());
    }
}

fn design(store: &ResonatorStore, topology: Topology, response: &mut Option<FilterResponse>) {
    match cascade(&store.curves(), topology) {
        Ok(designed) => {
            info!("{topology:?} filter designed over {} samples", designed.len());
            println!("{topology:?} filter designed successfully!");
            *response = Some(designed);
        }
        // Prior response stays untouched on failure.
        Err(e) => println!("Error designing filter: {e}"),
    }
}

fn report_metrics(response: Option<&FilterResponse>) {
    let Some(response) = response else {
        println!("No filter response to analyze.");
        return;
    };
    match analyze(&response.frequencies, &response.admittance) {
        Ok(metrics) => {
            println!("Resonant Frequency: {} Hz", metrics.resonant_frequency);
            println!("Bandwidth: {} Hz", metrics.bandwidth);
            println!("Quality Factor (Q): {:.2}", metrics.q_factor);
        }
        Err(e) => println!("Error computing quality metrics: {e}"),
    }
}

fn save(response: Option<&FilterResponse>, path: &Path) {
    let Some(response) = response else {
        println!("No filter response to save.");
        return;
    };
    let result = File::create(path).and_then(|file| write_response_csv(file, response));
    match result {
        Ok(()) => {
            info!("response saved to {}", path.display());
            println!("Results saved to {}.", path.display());
        }
        Err(e) => println!("Error saving results: {e}"),
    }
}
