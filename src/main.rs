use anyhow::Result;
use intellisense_generator::cli::{Cli, Commands};
use intellisense_generator::config::Config;
use intellisense_generator::pipeline::{Pipeline, WriteStatus};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate { config, verbose } => {
            init_logger(verbose);
            run_generate(&config)?;
        }
        Commands::Init { output, force } => {
            init_logger(false);
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Run the generate command
fn run_generate(config_path: &std::path::Path) -> Result<()> {
    let config = Config::load(config_path)?;
    log::debug!("Loaded configuration from: {}", config_path.display());

    let pipeline = Pipeline::new();
    let reports = pipeline.run(&config)?;

    let written = reports
        .iter()
        .filter(|r| r.status == WriteStatus::Written)
        .count();
    println!(
        "Generated {} target(s), {} unchanged",
        written,
        reports.len() - written
    );

    Ok(())
}

/// Run the init command
fn run_init(output_path: &std::path::Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - model_dir: Directory holding *.toml model manifests");
    println!("  - targets: Output files (.ts for declarations, anything else for stubs)");
    println!("  - namespace: Name of the generated namespace/module");
    println!("  - exclude: Directories to skip during scanning");

    Ok(())
}
