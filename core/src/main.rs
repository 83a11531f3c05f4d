//! CLI entry point for rawc-rs.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use rawc_rs::check::{report, run_checks};
use rawc_rs::cli::{Cli, Commands};
use rawc_rs::config::{Config, OutputFormat};
use rawc_rs::io::{read_array, RunOutput};
use rawc_rs::{registry, Primitive};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load optional config
    let config = if let Some(config_path) = &cli.config {
        Config::from_yaml_file(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(config.log_level()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            op,
            left,
            right,
            format,
        } => {
            // Reject a bad op or format before touching the operand files
            let op: Primitive = match op {
                Some(name) => name.parse()?,
                None => config.default_primitive()?,
            };
            let format: OutputFormat = match format {
                Some(name) => name.parse()?,
                None => config.output_format()?,
            };

            info!("Loading left operand: {}", left.display());
            let left = read_array(&left)
                .with_context(|| format!("Failed to read left operand: {}", left.display()))?;
            info!("Loading right operand: {}", right.display());
            let right = read_array(&right)
                .with_context(|| format!("Failed to read right operand: {}", right.display()))?;

            info!("Running {} on shape {:?}", op, left.shape());
            let result = op.call(&left, &right)?;

            let output = RunOutput::new(op.name(), &result);
            match format {
                OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&output)?),
                OutputFormat::Json => println!("{}", serde_json::to_string(&output)?),
            }
        }

        Commands::List => {
            for name in registry().names() {
                println!("{}", name);
            }
        }

        Commands::Check => {
            println!("rawc-rs v{}", env!("CARGO_PKG_VERSION"));
            println!();

            let outcomes = run_checks().context("Native self-check could not run")?;
            println!("{}", report(&outcomes));

            if !outcomes.iter().all(|o| o.passed()) {
                eprintln!("Native self-check failed");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
