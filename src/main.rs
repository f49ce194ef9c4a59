//! CLI entry point for the shelter report tool.
//!
//! Loads the intake-record snapshot once and prints or exports the
//! overview, outcome and advanced (tiered shelter) reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shelter_report::config::DashboardConfig;
use shelter_report::loader::DatasetCache;
use shelter_report::map::{adoption_markers, styled_boundaries, tier_markers};
use shelter_report::output::{print_json, print_pretty, write_csv, write_json};
use shelter_report::record::AnimalRecord;
use shelter_report::reports::{
    AdoptionTier, AdvancedReport, OutcomeReport, OverviewReport, available_years,
    default_selection,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "shelter_report")]
#[command(about = "Abandoned-animal shelter reports", long_about = None)]
struct Cli {
    /// JSON config file with dataset and log paths
    #[arg(long, global = true)]
    config: Option<String>,

    /// Intake-record CSV (overrides config)
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    /// Province boundary GeoJSON (overrides config)
    #[arg(long, global = true)]
    boundaries: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animal and shelter counts for the selected years
    Overview {
        /// Years for the animal count (defaults to the fourth year in the data)
        #[arg(long, value_delimiter = ',')]
        years: Vec<i32>,

        /// Years for the shelter count (defaults to the first four)
        #[arg(long, value_delimiter = ',')]
        shelter_years: Vec<i32>,
    },
    /// Outcome, neuter and sex breakdowns and the adoption ranking
    Report,
    /// Shelter tiers and the top shelters by adoptions
    Advanced {
        /// Tier shown on the map
        #[arg(long, value_enum, default_value_t = TierArg::Good)]
        tier: TierArg,

        /// Number of top shelters to list
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=15))]
        top: u8,
    },
    /// Write every report and map layer to a directory
    Export {
        /// Directory to write into
        #[arg(short, long, default_value = "out")]
        output_dir: PathBuf,

        /// Tier used for the tier marker layer
        #[arg(long, value_enum, default_value_t = TierArg::Good)]
        tier: TierArg,

        /// Number of top shelters in the advanced report
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=15))]
        top: u8,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TierArg {
    Good,
    Okay,
    Bad,
}

impl From<TierArg> for AdoptionTier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Good => Self::Good,
            TierArg::Okay => Self::Okay,
            TierArg::Bad => Self::Bad,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::from_env(),
    }
    .with_overrides(cli.records.clone(), cli.boundaries.clone());

    let _log_guard = init_logging(&config.log_file_path)?;

    let mut cache = DatasetCache::new();
    let records = cache
        .load_records(&config.records_path)
        .with_context(|| format!("loading records from {}", config.records_path.display()))?;

    match cli.command {
        Commands::Overview {
            years,
            shelter_years,
        } => {
            let report = overview(&records, years, shelter_years);
            info!(
                total_animals = report.total_animals,
                selected_animals = report.selected_animals,
                total_shelters = report.total_shelters,
                "Overview"
            );
            print_json(&report)?;
        }
        Commands::Report => {
            let report = OutcomeReport::build(&records)?;
            print_pretty(&report);
            print_json(&report)?;
        }
        Commands::Advanced { tier, top } => {
            let report = AdvancedReport::build(&records, tier.into(), usize::from(top));
            info!(
                good = report.tier_counts.good,
                okay = report.tier_counts.okay,
                bad = report.tier_counts.bad,
                selected_tier = %report.selected_tier,
                "Shelter tiers"
            );
            print_json(&report.top)?;
        }
        Commands::Export {
            output_dir,
            tier,
            top,
        } => {
            let boundaries = cache.load_boundaries(&config.boundaries_path).with_context(|| {
                format!(
                    "loading boundaries from {}",
                    config.boundaries_path.display()
                )
            })?;

            std::fs::create_dir_all(&output_dir)?;

            let overview = overview(&records, Vec::new(), Vec::new());
            let outcome = OutcomeReport::build(&records)?;
            let advanced = AdvancedReport::build(&records, tier.into(), usize::from(top));

            write_json(&output_dir.join("overview.json"), &overview)?;
            write_json(&output_dir.join("report.json"), &outcome)?;
            write_json(&output_dir.join("advanced.json"), &advanced)?;
            write_csv(&output_dir.join("shelters.csv"), &advanced.ranking)?;
            write_json(
                &output_dir.join("adoption_markers.geojson"),
                &adoption_markers(&outcome.adoption_ranking),
            )?;
            write_json(
                &output_dir.join("tier_markers.geojson"),
                &tier_markers(&advanced.selected),
            )?;
            write_json(
                &output_dir.join("provinces.geojson"),
                &styled_boundaries(&boundaries),
            )?;

            info!(output_dir = %output_dir.display(), "Export complete");
        }
    }

    Ok(())
}

/// Builds the overview, filling empty year selections with the defaults.
fn overview(records: &[AnimalRecord], years: Vec<i32>, shelter_years: Vec<i32>) -> OverviewReport {
    let defaults = default_selection(&available_years(records));
    let years = if years.is_empty() {
        defaults.animal_years
    } else {
        years
    };
    let shelter_years = if shelter_years.is_empty() {
        defaults.shelter_years
    } else {
        shelter_years
    };

    OverviewReport::build(records, &years, &shelter_years)
}

/// Logging setup: colored stderr + JSON rolling log file.
fn init_logging(log_file_path: &Path) -> Result<WorkerGuard> {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let log_file_name = log_file_path
        .file_name()
        .unwrap_or(OsStr::new("shelter_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse::<Directive>()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse::<Directive>()?),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
