use crate::catalog::RomEntry;
use crate::error::{AutoXisoError, Result, UserFriendlyError};
use crate::extractor::{BatchProgress, ExtractionObserver};
use console::{style, Emoji, Term};
use std::io::Write;
use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "");
static CROSS: Emoji = Emoji("❌ ", "");
static INFO: Emoji = Emoji("ℹ️  ", "");
static WARNING: Emoji = Emoji("⚠️  ", "");

const BANNER: [&str; 3] = [
    "#===========================#",
    "#    Auto Xiso Extractor    #",
    "#===========================#",
];

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported(),
            OutputMode::Plain => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        self.print_message(MessageType::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.print_message(MessageType::Error, message);
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(0) {
            self.print_message(MessageType::Warning, message);
        }
    }

    /// Warning-styled text the user must see to answer a prompt. Printed even
    /// in quiet mode.
    pub fn notice(&self, message: &str) {
        self.print_message(MessageType::Warning, message);
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(1) {
            if self.use_colors {
                println!("  {}", style(message).dim());
            } else {
                println!("  DEBUG: {}", message);
            }
        }
    }

    /// Unconditional line of menu or listing text.
    pub fn line(&self, text: &str) {
        println!("{}", text);
    }

    pub fn blank(&self) {
        println!();
    }

    /// Prompt text without a trailing newline.
    pub fn prompt(&self, text: &str) {
        if self.use_colors {
            print!("{}", style(text).bold());
        } else {
            print!("{}", text);
        }
        let _ = std::io::stdout().flush();
    }

    // User-friendly error handling
    pub fn print_user_friendly_error(&self, error: &AutoXisoError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            if self.quiet {
                return;
            }
            if self.use_colors {
                println!("{}{}", INFO, style(format!("Suggestion: {}", suggestion)).cyan());
            } else {
                println!("Suggestion: {}", suggestion);
            }
        }
    }

    // Specialized output methods
    pub fn print_banner(&self, catalog_size: usize, message: Option<&str>) {
        for line in BANNER {
            if self.use_colors {
                println!("{}", style(line).cyan().bold());
            } else {
                println!("{}", line);
            }
        }
        println!();

        if catalog_size > 0 {
            println!("Detected ROMs: {}", catalog_size);
            println!();
        }

        if let Some(message) = message.filter(|m| !m.is_empty()) {
            if self.use_colors {
                println!("{}", style(message).yellow().bold());
            } else {
                println!("{}", message);
            }
            println!();
        }
    }

    pub fn print_section(&self, title: &str) {
        let heading = format!("===| {} |===", title);
        if self.use_colors {
            println!("{}", style(heading).bold().cyan());
        } else {
            println!("{}", heading);
        }
    }

    pub fn print_batch_summary(&self, progress: &BatchProgress) {
        println!();
        let summary = format!(
            "Extracted {} of {} ROMs in {}",
            progress.succeeded,
            progress.total,
            format_duration(progress.elapsed())
        );

        if progress.errors.is_empty() {
            self.success(&summary);
        } else {
            self.warning(&summary);
            for error in &progress.errors {
                self.line(&format!("  - {}", error));
            }
        }
    }

    // Private helper methods
    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_message(&self, msg_type: MessageType, message: &str) {
        let (emoji, styled) = match msg_type {
            MessageType::Success => (&CHECKMARK, style(message).green().bold()),
            MessageType::Error => (&CROSS, style(message).red().bold()),
            MessageType::Warning => (&WARNING, style(message).yellow().bold()),
        };

        match (self.mode, self.use_colors) {
            (OutputMode::Human, true) => match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, styled),
                _ => println!("{}{}", emoji, styled),
            },
            _ => match msg_type {
                MessageType::Error => eprintln!("{}", message),
                _ => println!("{}", message),
            },
        }
    }
}

impl ExtractionObserver for OutputFormatter {
    fn on_start(&self, entry: &RomEntry, destination: &Path) {
        self.blank();
        self.line(&format!("Extracting: {}", entry.display_name));
        self.line(&format!("Destination: {}", destination.display()));
    }

    fn on_finish(&self, _entry: &RomEntry, result: &Result<ExitStatus>) {
        match result {
            Ok(status) => {
                self.success("\tComplete!");
                self.debug(&format!("extract-xiso exited with {}", status));
            }
            Err(e) => self.print_user_friendly_error(e),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
