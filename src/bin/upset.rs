use std::path::Path;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, error};

use upsetplot::config::UpsetConfig;
use upsetplot::input::{read_intersections, SetCollection};
use upsetplot::output::schema::schema_json_pretty;
use upsetplot::output::OutputCollector;
use upsetplot::upset::{enumerate_with, sort_records};

#[derive(Parser)]
#[command(name = "upset")]
#[command(
    about = "UpSet plot data generator",
    long_about = "Computes intersections among named sets and writes Plotly-ready bar, point and layout data for an UpSet plot."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute intersections from input sets and write plot data
    Compute {
        /// JSON set collection: either {"name": [elements]} or [{"name": ..., "elements": [...]}].
        #[arg(long, conflicts_with = "set", required_unless_present = "set")]
        sets_json: Option<String>,
        /// Set given as NAME=PATH, one element per line in PATH.
        /// Repeat for each set, in plot order.
        #[arg(long)]
        set: Vec<String>,
        /// Path to configuration JSON file (palette, styles, singleton mode, layout).
        #[arg(long)]
        config: Option<String>,
        /// Prefix for output files (e.g., "results/sample1").
        /// Output is written to <prefix>.upset.json.
        #[arg(long, required = true)]
        out_prefix: String,
        /// Force overwrite of existing output files.
        #[arg(short, long)]
        force: bool,
    },
    /// Rebuild plot data from a precomputed intersections file
    Replot {
        /// JSON array of {"set", "names", "setIndices"} records.
        #[arg(long, required = true)]
        intersections: String,
        /// Set display names in index order (comma-separated, e.g., "A,B,C").
        #[arg(long, required = true, value_delimiter = ',')]
        names: Vec<String>,
        /// Path to configuration JSON file.
        #[arg(long)]
        config: Option<String>,
        /// Prefix for output files. Output is written to <prefix>.upset.json.
        #[arg(long, required = true)]
        out_prefix: String,
        /// Force overwrite of existing output files.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the JSON Schema of the output file
    Schema,
}

fn check_output_paths(
    prefix: &str,
    suffixes: &[&str],
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(prefix);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }

    if !force {
        for suffix in suffixes {
            let p = format!("{}{}", prefix, suffix);
            if Path::new(&p).exists() {
                return Err(Box::new(std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    format!(
                        "Output file {} already exists. Use --force to overwrite.",
                        p
                    ),
                )));
            }
        }
    }

    Ok(())
}

fn run_compute(
    sets_json: Option<&str>,
    set_specs: &[String],
    config: &UpsetConfig,
    out_prefix: &str,
) -> anyhow::Result<()> {
    let collection = match sets_json {
        Some(path) => SetCollection::from_json_file(path)?,
        None => SetCollection::from_list_specs(set_specs)?,
    };
    let palette = config.palette(collection.len())?;
    let style = config.series_style()?;

    let records = enumerate_with(collection.sets(), config.singletons);
    info!(
        "Found {} intersections among {} sets",
        records.len(),
        collection.len()
    );

    let collector = OutputCollector::new()
        .with_sets(collection.names(), collection.sets(), &palette)
        .with_intersections(
            &records,
            collection.names(),
            &palette,
            &style,
            config.include_elements,
        )?
        .with_layouts(&config.layout);
    collector.write_to_prefix(out_prefix)?;
    Ok(())
}

fn run_replot(
    intersections: &str,
    names: &[String],
    config: &UpsetConfig,
    out_prefix: &str,
) -> anyhow::Result<()> {
    let mut records = read_intersections(intersections)?;
    sort_records(&mut records);
    info!("Loaded {} intersections", records.len());

    let palette = config.palette(names.len())?;
    let style = config.series_style()?;
    let collector = OutputCollector::new()
        .with_intersections(
            &records,
            names,
            &palette,
            &style,
            config.include_elements,
        )?
        .with_layouts(&config.layout);
    collector.write_to_prefix(out_prefix)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        };
        match file {
            Ok(f) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(2);
            }
        }
    }
    log_builder.init();

    let ok = match &cli.command {
        Commands::Compute {
            sets_json,
            set,
            config,
            out_prefix,
            force,
        } => {
            if let Err(e) = check_output_paths(out_prefix, &[".upset.json"], *force) {
                error!("{}", e);
                std::process::exit(1);
            }
            let upset_config = match UpsetConfig::load_or_default(config.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    error!("Error loading config {:?}: {}", config, e);
                    std::process::exit(1);
                }
            };
            match run_compute(sets_json.as_deref(), set, &upset_config, out_prefix) {
                Ok(()) => true,
                Err(e) => {
                    error!("Error computing intersections: {:#}", e);
                    false
                }
            }
        }
        Commands::Replot {
            intersections,
            names,
            config,
            out_prefix,
            force,
        } => {
            if let Err(e) = check_output_paths(out_prefix, &[".upset.json"], *force) {
                error!("{}", e);
                std::process::exit(1);
            }
            let upset_config = match UpsetConfig::load_or_default(config.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    error!("Error loading config {:?}: {}", config, e);
                    std::process::exit(1);
                }
            };
            match run_replot(intersections, names, &upset_config, out_prefix) {
                Ok(()) => true,
                Err(e) => {
                    error!("Error replotting intersections: {:#}", e);
                    false
                }
            }
        }
        Commands::Schema => match schema_json_pretty() {
            Ok(schema) => {
                println!("{}", schema);
                true
            }
            Err(e) => {
                error!("Error serializing schema: {}", e);
                false
            }
        },
    };

    if !ok {
        std::process::exit(1);
    }
}
