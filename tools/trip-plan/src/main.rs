use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tripmap_core::{Day, DayPlan, FitOptions, Viewport, plan_days, process_days_with};

mod input;
mod output;

use input::read_days;
use output::{Format, write_plan};

#[derive(Parser, Debug)]
#[command(
    name = "trip-plan",
    author,
    version,
    about = "Turn a trip's day-by-day places into map markers and routes",
    long_about = "Reads a trip (an array of days, or an object with a `days` field), \
                  numbers each day's places, colors every day from the trip palette, \
                  and swaps route coordinates into [lng, lat] order for map layers.\n\n\
                  Days past the tenth get a random light color; pass --seed to make \
                  those colors reproducible."
)]
struct Args {
    /// Input trip JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the processed plan
    #[arg(short, long)]
    output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Seed for colors of days past the palette
    #[arg(long)]
    seed: Option<u64>,

    /// Pass coordinates through without range checks
    #[arg(long)]
    skip_validation: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn build_plan(days: &[Day], seed: Option<u64>, validate: bool) -> Result<DayPlan> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if validate {
        plan_days(days, &mut rng).context("Trip failed validation")
    } else {
        Ok(process_days_with(days, &mut rng))
    }
}

fn log_summary(days: usize, plan: &DayPlan) {
    log::info!("Days: {days}");
    log::info!("Places: {}", plan.places.len());
    log::info!("Routes: {}", plan.routes.len());

    match plan.bounds() {
        Some(rect) => log::info!(
            "Bounds: ({:.5}, {:.5}) - ({:.5}, {:.5})",
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y
        ),
        None => log::info!("Bounds: none"),
    }

    let viewport = Viewport::fit(&plan.places, 1024.0, 768.0, FitOptions::default());
    log::debug!(
        "Viewport: center ({:.5}, {:.5}) zoom {:.2}",
        viewport.longitude,
        viewport.latitude,
        viewport.zoom
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    log::info!("Input: {}", args.input.display());
    log::info!("Output: {}", args.output.display());

    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }

    let days = read_days(&args.input)?;
    if args.skip_validation {
        log::warn!("Skipping coordinate validation (--skip-validation)");
    }

    let plan = build_plan(&days, args.seed, !args.skip_validation)?;
    log_summary(days.len(), &plan);

    write_plan(&plan, &args.output, args.format).context("Failed to write plan")?;
    log::info!("Done!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripmap_core::Place;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "trip-plan", "-i", "trip.json", "-o", "out.json", "--format", "geojson", "--seed", "9",
        ])
        .unwrap();

        assert_eq!(args.format, Format::Geojson);
        assert_eq!(args.seed, Some(9));
        assert!(!args.skip_validation);
    }

    #[test]
    fn test_build_plan_validation() {
        let days = vec![Day::new(vec![Place::new("bad", 100.0, 0.0)])];

        assert!(build_plan(&days, Some(1), true).is_err());
        assert_eq!(build_plan(&days, Some(1), false).unwrap().places.len(), 1);
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let days: Vec<Day> = (0..14)
            .map(|i| Day::new(vec![Place::new("stop", i as f64, i as f64)]))
            .collect();

        let a = build_plan(&days, Some(5), true).unwrap();
        let b = build_plan(&days, Some(5), true).unwrap();
        assert_eq!(a, b);
    }
}
