use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use geoinfo::geocode::NOMINATIM_URL;
use geoinfo::{
    Place, add_location, build_encoding, is_valid_coordinate, parse_bytes, parse_with_report,
    remove_location, reverse_geocode_url,
};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

/// Parse, build and edit member-map location strings
#[derive(Parser, Debug)]
#[command(name = "geoinfo", version, about)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a location string into coordinates
    Parse {
        /// Location string (read from stdin when omitted)
        text: Option<String>,
        /// Also list the fragments that were dropped
        #[arg(long)]
        report: bool,
    },
    /// Build the canonical encoding for one coordinate
    Build {
        #[command(flatten)]
        point: PointArgs,
    },
    /// Check whether a coordinate is within bounds
    Validate {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Append a coordinate to a location string
    Add {
        /// Current location string (read from stdin when omitted)
        current: Option<String>,
        #[command(flatten)]
        point: PointArgs,
    },
    /// Remove the location at an index from a location string
    Remove {
        /// Current location string (read from stdin when omitted)
        current: Option<String>,
        /// 0-based index among the parsed locations
        #[arg(long)]
        index: usize,
    },
    /// Derive a place name from a reverse-geocoding JSON reply
    PlaceName {
        /// JSON file (read from stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the reverse-geocoding request URL for a coordinate
    GeocodeUrl {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Reverse-geocoding endpoint
        #[arg(long, default_value = NOMINATIM_URL)]
        base: String,
    },
}

#[derive(clap::Args, Debug)]
struct PointArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,
    /// Map zoom level
    #[arg(long)]
    zoom: Option<u32>,
    /// Place name to attach
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse { text, report } => cmd_parse(text, report, cli.pretty),
        Commands::Build { point } => cmd_build(&point),
        Commands::Validate { lat, lng } => cmd_validate(lat, lng),
        Commands::Add { current, point } => cmd_add(current, &point),
        Commands::Remove { current, index } => cmd_remove(current, index),
        Commands::PlaceName { file } => cmd_place_name(file),
        Commands::GeocodeUrl { lat, lng, base } => {
            println!("{}", reverse_geocode_url(&base, lat, lng));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read stdin")?;
    Ok(bytes)
}

/// Use the argument if given, otherwise read all of stdin
fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => String::from_utf8(read_stdin()?).context("stdin is not valid UTF-8"),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn cmd_parse(text: Option<String>, report: bool, pretty: bool) -> Result<()> {
    let bytes = match text {
        Some(text) => text.into_bytes(),
        None => read_stdin()?,
    };

    if !report {
        return print_json(&parse_bytes(&bytes)?, pretty);
    }

    let text = std::str::from_utf8(&bytes).context("location string is not valid UTF-8")?;
    print_json(&parse_with_report(text), pretty)
}

fn cmd_build(point: &PointArgs) -> Result<()> {
    if !is_valid_coordinate(point.lat, point.lng) {
        bail!("Invalid coordinates: lat {}, lng {}", point.lat, point.lng);
    }

    println!(
        "{}",
        build_encoding(point.lat, point.lng, point.zoom, point.name.as_deref())
    );
    Ok(())
}

fn cmd_validate(lat: f64, lng: f64) -> Result<()> {
    let valid = is_valid_coordinate(lat, lng);
    println!("{}", valid);
    if !valid {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_add(current: Option<String>, point: &PointArgs) -> Result<()> {
    let current = text_or_stdin(current)?;
    let updated = add_location(
        current.trim(),
        point.lat,
        point.lng,
        point.zoom,
        point.name.as_deref(),
    )?;
    println!("{}", updated);
    Ok(())
}

fn cmd_remove(current: Option<String>, index: usize) -> Result<()> {
    let current = text_or_stdin(current)?;
    let updated = remove_location(&current, index)?;
    println!("{}", updated);
    Ok(())
}

fn cmd_place_name(file: Option<PathBuf>) -> Result<()> {
    let json = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => text_or_stdin(None)?,
    };

    match Place::from_json(&json)?.and_then(|place| place.display_name()) {
        Some(name) => println!("{}", name),
        None => bail!("Reply carries neither city nor postcode"),
    }
    Ok(())
}
