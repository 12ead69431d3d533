use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoXisoError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory unavailable: {}", path.display())]
    PathMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Extractor executable not found: {}", path.display())]
    ExecutableMissing { path: PathBuf },

    #[error("Failed to launch {}", program.display())]
    ProcessLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot rename {} to {}: destination already exists", from.display(), to.display())]
    RenameConflict { from: PathBuf, to: PathBuf },

    #[error("Failed to rename {} to {}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {input}")]
    InvalidUserInput { input: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for AutoXisoError {
    fn user_message(&self) -> String {
        match self {
            AutoXisoError::PathMissing { path, source } => {
                format!("Directory unavailable: {} ({})", path.display(), source)
            }
            AutoXisoError::ExecutableMissing { path } => {
                format!("extract-xiso is missing!\nExpected here: {}", path.display())
            }
            AutoXisoError::ProcessLaunch { program, source } => {
                format!("Failed to launch {}: {}", program.display(), source)
            }
            AutoXisoError::RenameConflict { from, to } => {
                format!(
                    "Cannot rename '{}': '{}' already exists",
                    from.display(),
                    to.display()
                )
            }
            AutoXisoError::Rename { from, to, source } => {
                format!(
                    "Failed to rename '{}' to '{}': {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            AutoXisoError::InvalidUserInput { input } => {
                format!("Invalid input: '{}'", input)
            }
            AutoXisoError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            AutoXisoError::Io(e) => format!("IO operation failed: {}", e),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            AutoXisoError::PathMissing { .. } => Some(
                "Check that the parent directory exists and is writable, or point --input/--output elsewhere.".to_string()
            ),
            AutoXisoError::ExecutableMissing { .. } => Some(
                "Place the extract-xiso binary at the expected path or set it with --extractor.".to_string()
            ),
            AutoXisoError::ProcessLaunch { .. } => Some(
                "Make sure the extractor is a runnable executable for this platform.".to_string()
            ),
            AutoXisoError::RenameConflict { .. } => Some(
                "Remove or rename the existing folder, then run Clear Ext again.".to_string()
            ),
            AutoXisoError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all required fields are present.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for AutoXisoError {
    fn from(error: toml::de::Error) -> Self {
        AutoXisoError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AutoXisoError>;
