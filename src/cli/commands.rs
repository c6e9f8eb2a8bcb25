use crate::cli::args::{Cli, Commands, ConvertArgs};
use crate::error::Result;
use crate::models::{GeoCoordinate, Hemisphere, LatitudeCoverage, ProjectedPoint, UtmZone};
use crate::processors::{Pipeline, PipelineOptions};
use crate::projection::{band_letter, Projector, Transformer};
use crate::utils::coordinates::decimal_to_dms;
use crate::utils::progress::ProgressReporter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Convert(ConvertArgs::default()));

    match command {
        Commands::Convert(args) => convert(args, cli.quiet),

        Commands::Point {
            lat,
            lon,
            allow_polar,
        } => {
            let transformer = Transformer::new()?.with_coverage(coverage(allow_polar));
            let projection = transformer.transform(lat, lon)?;

            println!("Zone:     {}", projection.zone);
            println!("Easting:  {:.3}", projection.point.easting);
            println!("Northing: {:.3}", projection.point.northing);
            Ok(())
        }

        Commands::Inverse {
            easting,
            northing,
            zone,
            south,
        } => {
            let hemisphere = if south {
                Hemisphere::South
            } else {
                Hemisphere::North
            };
            let zone = UtmZone::new(zone, hemisphere, None);
            debug!("Inverting ({}, {}) in zone {}", easting, northing, zone);

            let transformer = Transformer::new()?;
            let coordinate: GeoCoordinate = transformer
                .projector()
                .unproject(&ProjectedPoint::new(easting, northing), &zone)?;
            let zone = UtmZone::new(zone.number, hemisphere, band_letter(coordinate.latitude));

            println!("Zone:      {}", zone);
            println!(
                "Latitude:  {:.8} ({})",
                coordinate.latitude,
                decimal_to_dms(coordinate.latitude)
            );
            println!(
                "Longitude: {:.8} ({})",
                coordinate.longitude,
                decimal_to_dms(coordinate.longitude)
            );
            Ok(())
        }
    }
}

fn convert(args: ConvertArgs, quiet: bool) -> Result<()> {
    let pipeline = Pipeline::from_options(PipelineOptions {
        coverage: coverage(args.allow_polar),
    })?;

    let progress = ProgressReporter::new_spinner("Projecting rows...", quiet);

    let report = if args.dry_run {
        info!("Dry run, {} will not be written", args.output.display());
        pipeline.dry_run(&args.input, Some(&progress))?
    } else {
        pipeline.run(&args.input, &args.output, Some(&progress))?
    };

    if !quiet {
        println!("\n{}", report.summary());
    }

    if args.dry_run {
        println!("Dry run complete - no output file written");
    } else {
        info!(
            "Converted {} rows from {} into {}",
            report.total_rows,
            args.input.display(),
            args.output.display()
        );
    }

    Ok(())
}

fn coverage(allow_polar: bool) -> LatitudeCoverage {
    if allow_polar {
        LatitudeCoverage::Extended
    } else {
        LatitudeCoverage::Standard
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
