pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod session;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, PathConfig, ScanConfig};
pub use error::{AutoXisoError, Result, UserFriendlyError};

// Core functionality re-exports
pub use catalog::{strip_all_extensions, RomEntry, RomFilter, RomScanner, ScanOutcome};
pub use extractor::{BatchProgress, ExtractionObserver, FolderRenamer, RenameSummary, XisoRunner};
pub use session::{Action, Flow, MenuAction, Phase, Session, SessionState, MENU};
pub use ui::{Console, OutputFormatter, OutputMode, ScriptedConsole, TerminalConsole};

use std::path::Path;

/// Main library interface for AutoXiso
pub struct AutoXiso {
    config: Config,
    output_mode: OutputMode,
    verbose: u8,
    quiet: bool,
}

impl AutoXiso {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            config,
            output_mode,
            verbose,
            quiet,
        }
    }

    /// Create AutoXiso instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    pub fn output_formatter(&self) -> OutputFormatter {
        OutputFormatter::new(self.output_mode, self.verbose, self.quiet)
    }

    /// Build a session reading from the given console
    pub fn session<C: Console>(&self, console: C) -> Session<C> {
        Session::new(self.config.clone(), self.output_formatter(), console)
    }

    /// Run the interactive menu on the process terminal until Exit
    pub fn run_interactive(&self) {
        tracing::info!(
            input = %self.config.paths.input_dir.display(),
            output = %self.config.paths.output_dir.display(),
            extractor = %self.config.paths.extractor.display(),
            "starting session"
        );
        self.session(TerminalConsole::new()).run();
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
