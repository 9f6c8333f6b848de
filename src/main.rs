use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pigment::models::{config::CONFIG_ENV, AppConfig};
use pigment::services::{demo, fuzz, inspect, replay, Family, Values};

#[derive(Parser)]
#[command(name = "pigment")]
#[command(about = "RGB/HSV color conversion toolkit")]
struct Cli {
    /// Config file (overrides PIGMENT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places for floating channels (overrides config)
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a walkthrough of construction, conversion and alpha handling
    Demo,
    /// Convert a single color between RGB and HSV
    Convert {
        /// Color family of the given values
        #[arg(long, value_enum)]
        from: Family,

        /// Comma separated channel values, 3 or 4 (e.g. "0,100,255")
        #[arg(long)]
        values: String,

        /// Treat values as unit floats (0.0-1.0) instead of bytes (0-255)
        #[arg(long)]
        float: bool,
    },
    /// Exercise random inputs against every color variant
    Fuzz {
        /// Number of random inputs (overrides config)
        #[arg(short, long)]
        iterations: Option<usize>,

        /// RNG seed (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Directory to save crashing inputs into
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Decode a saved 32-byte input and exercise it
    Replay {
        /// Input file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pigment=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut config = AppConfig::load(cli.config.as_deref());
    if cli.precision.is_some() {
        config.precision = cli.precision;
    }

    match cli.command {
        Some(Commands::Demo) => {
            print!("{}", demo::run(&config));
            Ok(())
        }
        Some(Commands::Convert {
            from,
            values,
            float,
        }) => run_convert_command(from, &values, float, &config),
        Some(Commands::Fuzz {
            iterations,
            seed,
            save,
        }) => {
            if let Some(iterations) = iterations {
                config.fuzz.iterations = iterations;
            }
            if seed.is_some() {
                config.fuzz.seed = seed;
            }
            run_fuzz_command(&config, save)
        }
        Some(Commands::Replay { file }) => {
            print!("{}", replay::replay(&file, config.precision)?);
            Ok(())
        }
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

fn run_convert_command(
    from: Family,
    values: &str,
    float: bool,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let values = Values::parse(values, float)?;
    print!("{}", inspect::describe(from, &values, config.precision));
    Ok(())
}

fn run_fuzz_command(config: &AppConfig, save: Option<PathBuf>) -> anyhow::Result<()> {
    let report = fuzz::run_random(&config.fuzz, save.as_deref())?;

    println!("Iterations:        {}", report.iterations);
    println!("Non-finite inputs: {}", report.non_finite);
    println!("Crashes:           {}", report.crashes.len());
    for path in &report.crashes {
        println!("  {}", path.display());
    }

    if !report.crashes.is_empty() {
        anyhow::bail!("{} input(s) panicked", report.crashes.len());
    }
    Ok(())
}

fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();

    println!("Pigment v{VERSION} - RGB/HSV color toolkit\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nSettings:");
    match config.precision {
        Some(precision) => println!("  precision       = {precision}"),
        None => println!("  precision       = (shortest)"),
    }
    println!("  fuzz.iterations = {}", config.fuzz.iterations);
    match config.fuzz.seed {
        Some(seed) => println!("  fuzz.seed       = {seed}"),
        None => println!("  fuzz.seed       = (random)"),
    }
    println!("  demo.show_alpha = {}", config.demo.show_alpha);

    println!("\nCommands:");
    println!("  pigment demo                              Walk through the color API");
    println!("  pigment convert --from hsv --values 0,100,255");
    println!("  pigment fuzz --iterations 10000 --save crashes/");
    println!("  pigment replay crashes/crash-<digest>");
}
