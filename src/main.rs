//! CLI entry point for the CCR data build.
//!
//! `build` consolidates the school sources into the web app's JSON files;
//! `rank` prints adjusted rankings from a previously built `schools.json`.

use anyhow::{Context, Result};
use ccr_data::adjusted::{FactorWeights, assign_adjusted_ranks};
use ccr_data::classify::BiasLabel;
use ccr_data::config::BuildConfig;
use ccr_data::output::read_schools;
use ccr_data::pipeline;
use ccr_data::registry::master_schools;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ccr_data")]
#[command(about = "Builds the static school data for the CCR web app", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge all sources into schools.json and charts.json
    Build {
        /// Data root holding output/, data/, scrapers/ and charts/ [env: CCR_ROOT]
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Web app directory receiving public/data and public/charts [env: CCR_WEB_DIR]
        #[arg(short, long)]
        web_dir: Option<PathBuf>,

        /// Optional JSON file overriding source paths, chart settings and phase windows
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print schools ordered by adjusted rank
    Rank {
        /// Built schools.json to read
        #[arg(value_name = "SCHOOLS_JSON", default_value = "webapp/public/data/schools.json")]
        schools: PathBuf,

        /// Share of the composite given to the conservative factors (0 to 1)
        #[arg(short = 'c', long, default_value_t = 0.5)]
        conservative_weight: f64,

        /// Number of schools to print (0 = all)
        #[arg(short = 'n', long, default_value_t = 25)]
        top: usize,

        #[arg(long, default_value_t = 0.35)]
        bias_weight: f64,
        #[arg(long, default_value_t = 0.25)]
        fec_weight: f64,
        #[arg(long, default_value_t = 0.25)]
        fire_weight: f64,
        #[arg(long, default_value_t = 0.15)]
        dei_weight: f64,

        /// Print JSON to stdout instead of log lines
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/ccr_data.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ccr_data.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            root,
            web_dir,
            config,
        } => {
            let config = BuildConfig::resolve(root, web_dir, config.as_deref())
                .context("loading build configuration")?;
            info!(
                root = %config.root.display(),
                web_dir = %config.web_dir.display(),
                "Starting build"
            );

            let report = pipeline::run(&config, master_schools())?;

            for merge in &report.merges {
                info!(
                    source = merge.source,
                    matched = merge.matched,
                    unknown = merge.unknown,
                    "Source summary"
                );
            }
            info!(
                schools = report.schools,
                charts = report.charts,
                charts_copied = report.charts_copied,
                sources = report.merges.len(),
                phase_schools = report.phase.as_ref().map(|p| p.schools),
                "Build complete"
            );
        }
        Commands::Rank {
            schools,
            conservative_weight,
            top,
            bias_weight,
            fec_weight,
            fire_weight,
            dei_weight,
            json,
        } => {
            let records = read_schools(&schools)
                .with_context(|| format!("reading {}", schools.display()))?;
            let weights = FactorWeights {
                bias: bias_weight,
                fec: fec_weight,
                fire: fire_weight,
                dei: dei_weight,
            };
            let ranked = assign_adjusted_ranks(&records, conservative_weight, &weights)?;
            let shown = if top == 0 { ranked.len() } else { top.min(ranked.len()) };

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked[..shown])?);
            } else {
                for r in &ranked[..shown] {
                    let lean = r
                        .school
                        .bias
                        .as_ref()
                        .map_or(BiasLabel::NoData, |b| b.bias_label);
                    info!(
                        adjusted_rank = r.adjusted_rank,
                        usnews_rank = %r.school.rank_display,
                        tier = r.school.tier.label(),
                        lean = lean.label(),
                        score = %format!("{:.4}", r.composite_score),
                        school = %r.school.name,
                        "Rank"
                    );
                }
            }
            info!(total = ranked.len(), shown, conservative_weight, "Adjusted ranking");
        }
    }

    Ok(())
}
