use anyhow::Context;
use autoxiso::{logging, AutoXiso, AutoXisoError, Cli, OutputFormatter, OutputMode};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbosity_level());

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let app = match AutoXiso::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // Only returns once Exit is chosen or stdin closes
    app.run_interactive();
    0
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("autoxiso.toml"));

    match write_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path.display());
            println!("\nTo use this configuration:");
            println!("  autoxiso --config {}", config_path.display());
            println!("\nEdit the file to customize paths and extensions.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {:#}", e);
            1
        }
    }
}

fn write_sample_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    AutoXiso::generate_sample_config(path)
        .with_context(|| format!("could not write {}", path.display()))
}

fn print_startup_error(error: &AutoXisoError) {
    tracing::error!(error = %error, "startup failed");
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}
