use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use itertools::Itertools;

use crate::{
    network::{Network, StationId},
    stations::StationDirectory,
};

mod error;
mod network;
mod routes;
mod search;
mod stations;

#[derive(Debug, Parser)]
#[command(about = "Find the subway connection with the fewest stops")]
struct Cli {
    /// Station names, one per line; the line number is the station id
    #[arg(long, default_value = "mbta_stations.txt")]
    stations: PathBuf,

    /// Start station name (prompted for when omitted)
    start: Option<String>,

    /// Destination station name (prompted for when omitted)
    end: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directory = StationDirectory::load(&cli.stations)
        .with_context(|| format!("reading station names from {}", cli.stations.display()))?;
    let network = Network::build(&routes::subway_lines())?;

    let start_name = station_name(cli.start, "Where to start? ")?;
    let end_name = station_name(cli.end, "Where do you want to go? ")?;

    let start = resolve(&directory, &start_name)?;
    let end = resolve(&directory, &end_name)?;

    match search::shortest_path(&network, start, end) {
        Some(path) => println!("{}", render(&path, &directory)),
        None => println!(
            "no route found between {} and {}",
            start_name.trim().to_lowercase(),
            end_name.trim().to_lowercase()
        ),
    }

    Ok(())
}

fn station_name(arg: Option<String>, prompt: &str) -> Result<String> {
    match arg {
        Some(name) => Ok(name),
        None => {
            print!("{prompt}");
            io::stdout().flush()?;

            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("reading station name")?;
            Ok(line.trim().to_owned())
        }
    }
}

fn resolve(directory: &StationDirectory, name: &str) -> Result<StationId> {
    match directory.id(name) {
        Some(station) => Ok(station),
        None => bail!("unknown station name {name:?}"),
    }
}

fn render(path: &[StationId], directory: &StationDirectory) -> String {
    path.iter()
        .map(|&station| match directory.name(station) {
            Some(name) => name.to_owned(),
            None => format!("#{station}"),
        })
        .join(" -> ")
}
