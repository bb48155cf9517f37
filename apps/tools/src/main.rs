use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use server_api::{charts, layout};
use shared::domain::{PayloadRange, SiteSelection, ALL_SITES_VALUE};
use storage::Dataset;

/// Renders dashboard figures from a launch dataset without starting the server.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "spacex_launch_dash.csv")]
    dataset: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record count, sites and payload bounds.
    Summary,
    /// The dashboard component tree.
    Layout,
    /// Success pie for one site or all sites.
    Pie {
        #[arg(long, default_value = ALL_SITES_VALUE)]
        site: String,
    },
    /// Payload bounds default to the dataset extremes.
    Scatter {
        #[arg(long, default_value = ALL_SITES_VALUE)]
        site: String,
        #[arg(long)]
        low: Option<f64>,
        #[arg(long)]
        high: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dataset = Dataset::load(&cli.dataset)?;

    match cli.command {
        Command::Summary => print_json(&dataset.summary()),
        Command::Layout => print_json(&layout::build_layout(&dataset)),
        Command::Pie { site } => {
            let site = SiteSelection::from(site);
            print_json(&charts::success_pie_chart(&dataset, &site))
        }
        Command::Scatter { site, low, high } => {
            let site = SiteSelection::from(site);
            let range = PayloadRange::new(
                low.unwrap_or(dataset.min_payload_kg()),
                high.unwrap_or(dataset.max_payload_kg()),
            )?;
            print_json(&charts::payload_scatter_chart(&dataset, &site, range))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
