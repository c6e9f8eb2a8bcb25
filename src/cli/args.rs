use crate::utils::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "utm-reproject")]
#[command(about = "Reproject latitude/longitude CSV records into WGS84 UTM coordinates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress output")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append UTM X/UTM Y columns to every row of a CSV file (default)
    Convert(ConvertArgs),

    /// Project a single latitude/longitude pair
    Point {
        #[arg(long, allow_negative_numbers = true, help = "Latitude in decimal degrees")]
        lat: f64,

        #[arg(long, allow_negative_numbers = true, help = "Longitude in decimal degrees")]
        lon: f64,

        #[arg(long, help = "Project latitudes outside [-80, 84]")]
        allow_polar: bool,
    },

    /// Convert a UTM easting/northing back to latitude/longitude
    Inverse {
        #[arg(long, allow_negative_numbers = true)]
        easting: f64,

        #[arg(long, allow_negative_numbers = true)]
        northing: f64,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=60))]
        zone: u8,

        #[arg(long, help = "Coordinates use the southern hemisphere false northing")]
        south: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input CSV file")]
    pub input: PathBuf,

    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE, help = "Output CSV file")]
    pub output: PathBuf,

    #[arg(long, help = "Project latitudes outside [-80, 84]")]
    pub allow_polar: bool,

    #[arg(long, help = "Project every row but write no output file")]
    pub dry_run: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            allow_polar: false,
            dry_run: false,
        }
    }
}
