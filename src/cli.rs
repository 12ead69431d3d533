use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autoxiso")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive menu for extracting Xbox disc images with extract-xiso")]
#[command(
    long_about = "AutoXiso detects .iso/.xiso images in an input directory and runs extract-xiso \
                  against one or all of them, writing the extracted folders to an output directory."
)]
#[command(after_help = "EXAMPLES:\n  \
    autoxiso\n  \
    autoxiso --input roms --output extracted\n  \
    autoxiso --extractor /usr/local/bin/extract-xiso\n  \
    autoxiso --config my-autoxiso.toml\n  \
    autoxiso --generate-config")]
pub struct Cli {
    /// Directory scanned for disc images
    #[arg(short, long, help = "Directory to scan for disc images (default: ./input/)")]
    pub input: Option<PathBuf>,

    /// Directory extracted images are written to
    #[arg(short, long, help = "Extraction destination (default: ./output/)")]
    pub output: Option<PathBuf>,

    /// Path to the extract-xiso executable
    #[arg(short, long, help = "Path to extract-xiso (default: ./dependents/extract-xiso.exe)")]
    pub extractor: Option<PathBuf>,

    /// Disc image extensions (comma-separated)
    #[arg(long, help = "File extensions to detect (e.g., iso,xiso)")]
    pub extensions: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress informational output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Write a sample configuration file and exit")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_input_dir(self.input.clone())
            .with_output_dir(self.output.clone())
            .with_extractor(self.extractor.clone())
            .with_extensions(self.extensions.clone())
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
