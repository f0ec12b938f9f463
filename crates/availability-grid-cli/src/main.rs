//! `avail` CLI — compact, expand, and inspect weekly availability grids.
//!
//! ## Usage
//!
//! ```sh
//! # Selected cells → intervals (stdin → stdout)
//! echo '[{"day":2,"slot":4},{"day":2,"slot":5}]' | avail compact
//!
//! # Intervals → selected cells, file to file
//! avail expand -i availability.json -o cells.json
//!
//! # Merge and sort saved intervals
//! avail normalize -i availability.json
//!
//! # Show the grid
//! avail grid -i availability.json --summary
//!
//! # Add a day part to a saved schedule
//! avail preset --day Friday --part evening -i availability.json
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` (e.g. `RUST_LOG=availability_grid=trace`)
//! or pass `-v` for debug output.

use anyhow::{Context, Result};
use availability_grid::{
    compact, expand, first_available, normalize, render_grid, select_day_part, selected_minutes,
    AvailabilityInterval, Cell, Day, DayPart, Selection,
};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "avail", version, about = "Weekly availability grid CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compact a JSON list of selected cells into intervals
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Expand a JSON list of intervals into selected cells
    Expand {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Rewrite intervals in canonical form (sorted, merged)
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the grid for a JSON list of intervals
    Grid {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Also print total hours and the first available slot of each day
        #[arg(long)]
        summary: bool,
    },
    /// Add a day part (morning, afternoon, evening, night) to a schedule
    Preset {
        /// Day name, e.g. "Monday"
        #[arg(long)]
        day: String,
        /// Day part id
        #[arg(long)]
        part: String,
        /// Existing intervals file (starts from an empty grid if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compact { input, output } => {
            let json = read_input(input.as_deref())?;
            let cells: Vec<Cell> =
                serde_json::from_str(&json).context("Failed to parse cells JSON")?;
            let selection: Selection = cells.into_iter().collect();
            let intervals = compact(&selection);
            info!(cells = selection.len(), intervals = intervals.len(), "compacted");
            write_json(output.as_deref(), &intervals)?;
        }
        Commands::Expand { input, output } => {
            let selection = read_intervals(input.as_deref())?;
            let cells: Vec<Cell> = selection.iter().collect();
            info!(cells = cells.len(), "expanded");
            write_json(output.as_deref(), &cells)?;
        }
        Commands::Normalize { input, output } => {
            let intervals = parse_intervals(&read_input(input.as_deref())?)?;
            let canonical = normalize(&intervals).context("Invalid availability")?;
            info!(
                before = intervals.len(),
                after = canonical.len(),
                "normalized"
            );
            write_json(output.as_deref(), &canonical)?;
        }
        Commands::Grid { input, summary } => {
            let selection = read_intervals(input.as_deref())?;
            print!("{}", render_grid(&selection));
            if summary {
                print!("{}", summarize(&selection));
            }
        }
        Commands::Preset {
            day,
            part,
            input,
            output,
        } => {
            let day: Day = day.parse()?;
            let part: DayPart = part.parse()?;
            let mut selection = match input.as_deref() {
                Some(path) => read_intervals(Some(path))?,
                None => Selection::new(),
            };
            let added = select_day_part(&mut selection, day, part);
            info!(%day, %part, added, "preset applied");
            write_json(output.as_deref(), &compact(&selection))?;
        }
    }

    Ok(())
}

/// Total selected time plus the earliest available slot of each day.
fn summarize(selection: &Selection) -> String {
    let minutes = selected_minutes(selection);
    let mut out = format!("\nTotal: {}h{:02}\n", minutes / 60, minutes % 60);
    for day in Day::ALL {
        if let Some(start) = first_available(selection, day) {
            out.push_str(&format!("{:<10}from {}\n", day.name(), start));
        }
    }
    out
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_intervals(json: &str) -> Result<Vec<AvailabilityInterval>> {
    serde_json::from_str(json).context("Failed to parse availability JSON")
}

/// Read and expand an intervals file.
fn read_intervals(path: Option<&str>) -> Result<Selection> {
    let intervals = parse_intervals(&read_input(path)?)?;
    debug!(intervals = intervals.len(), "read availability");
    expand(&intervals).context("Invalid availability")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: serde::Serialize + ?Sized>(path: Option<&str>, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", pretty))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
