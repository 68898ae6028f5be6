use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use caltrain_arrivals::domain::ClockTime;
use caltrain_arrivals::fetch::{DEFAULT_URL, TimetableClient, TimetableClientConfig};
use caltrain_arrivals::query::QueryConfig;
use caltrain_arrivals::report::{ArrivalDto, ConnectionDto, TripDto};
use caltrain_arrivals::schedule::{Schedule, load_schedule};
use caltrain_arrivals::walkable::caltrain_connections;

/// Next Caltrain arrivals from the published timetable.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Timetable page to fetch
    #[arg(long, env = "CALTRAIN_TIMETABLE_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Read a saved timetable page instead of fetching
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Next arrival of each train at a station
    Arrivals {
        station: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Trains running from one station to another
    Trips {
        from: String,
        to: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Every way into a station: trains from earlier stops and walks from
    /// neighbouring stations
    Incoming {
        station: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// List the stations in the timetable
    Stations,
}

#[derive(Args)]
struct QueryArgs {
    /// Reference time, e.g. "8:15am" or "20:15" (defaults to now)
    #[arg(long, value_parser = parse_after)]
    after: Option<ClockTime>,

    /// Skip weekend-only trains
    #[arg(long)]
    weekday_only: bool,

    /// Show at most this many results
    #[arg(long)]
    limit: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl QueryArgs {
    fn config(&self) -> QueryConfig {
        QueryConfig::new(!self.weekday_only, self.limit)
    }

    fn after(&self) -> ClockTime {
        self.after
            .unwrap_or_else(|| ClockTime::from_naive(Local::now().time()))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_after(s: &str) -> Result<ClockTime, String> {
    if let Ok(time) = ClockTime::parse_ampm(s) {
        return Ok(time);
    }
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(ClockTime::from_naive)
        .map_err(|_| format!("expected a time like 8:15am or 20:15, got {s:?}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let schedule = match &cli.html_file {
        Some(path) => Schedule::from_file(path)?,
        None => {
            let config = TimetableClientConfig::new()
                .with_url(&cli.url)
                .with_timeout(cli.timeout);
            let client = TimetableClient::new(config)?;
            load_schedule(&client).await?
        }
    };

    let stations = schedule.stations();

    match cli.command {
        Command::Arrivals { station, query } => {
            let station = stations.resolve(&station)?;
            let arrivals = schedule.next_arrivals(&station.name, query.after(), &query.config());

            match query.format {
                OutputFormat::Text => {
                    for arrival in &arrivals {
                        println!("{arrival}");
                    }
                }
                OutputFormat::Json => {
                    let dtos: Vec<_> = arrivals.iter().map(ArrivalDto::from_arrival).collect();
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&dtos).context("serializing arrivals")?
                    );
                }
            }
        }
        Command::Trips { from, to, query } => {
            let from = stations.resolve(&from)?;
            let to = stations.resolve(&to)?;
            let trips =
                schedule.next_trips(&from.name, &to.name, query.after(), &query.config());

            match query.format {
                OutputFormat::Text => {
                    for trip in &trips {
                        println!("{trip}");
                    }
                }
                OutputFormat::Json => {
                    let dtos: Vec<_> = trips.iter().map(TripDto::from_trip).collect();
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&dtos).context("serializing trips")?
                    );
                }
            }
        }
        Command::Incoming { station, query } => {
            let station = stations.resolve(&station)?;
            let connections = schedule.incoming_connections(
                &station.name,
                query.after(),
                &caltrain_connections(),
                &query.config(),
            );

            match query.format {
                OutputFormat::Text => {
                    for connection in &connections {
                        println!("{connection}");
                    }
                }
                OutputFormat::Json => {
                    let dtos: Vec<_> = connections
                        .iter()
                        .map(ConnectionDto::from_connection)
                        .collect();
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&dtos).context("serializing connections")?
                    );
                }
            }
        }
        Command::Stations => {
            for station in stations.stations() {
                println!("{} (zone {})", station.name, station.zone);
            }
        }
    }

    Ok(())
}
