use crate::catalog::{RomEntry, RomScanner};
use crate::config::Config;
use crate::extractor::{FolderRenamer, RenameOutcome, XisoRunner};
use crate::session::menu::{find_action, visible_actions, Action};
use crate::session::prompts::{parse_confirmation, parse_index_choice, IndexChoice};
use crate::ui::{Console, OutputFormatter};
use std::io;

pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
const RETURNING_TO_MENU: &str = "Returning to Main Menu...";
const MAX_READ_FAILURES: usize = 3;

/// Mutable state shared by the menu actions.
#[derive(Debug, Default)]
pub struct SessionState {
    pub catalog: Vec<RomEntry>,
    pub catalog_ready: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Rendering,
    AwaitingSelection,
    Executing(Action),
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<C: Console> {
    config: Config,
    formatter: OutputFormatter,
    console: C,
    scanner: RomScanner,
    runner: XisoRunner,
    renamer: FolderRenamer,
    state: SessionState,
}

impl<C: Console> Session<C> {
    pub fn new(config: Config, formatter: OutputFormatter, console: C) -> Self {
        let scanner = RomScanner::new(&config.normalized_extensions());
        let runner = XisoRunner::new(&config.paths.extractor, &config.paths.output_dir);
        let renamer = FolderRenamer::new(&config.paths.output_dir);

        Self {
            config,
            formatter,
            console,
            scanner,
            runner,
            renamer,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs the menu loop until Exit is chosen or input is closed.
    pub fn run(&mut self) {
        if let Some(problem) = self.startup_problem() {
            self.formatter.error(problem);
            self.exit();
            return;
        }

        self.detect();
        self.console.clear();

        let mut phase = Phase::Rendering;
        let mut read_failures = 0;

        while phase != Phase::Terminated {
            phase = match self.step(phase) {
                Ok(next) => {
                    read_failures = 0;
                    next
                }
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => self.input_closed(e),
                Err(e) => {
                    read_failures += 1;
                    self.read_failed(e, read_failures)
                }
            };
        }
    }

    /// Advances the state machine by one transition.
    pub fn step(&mut self, phase: Phase) -> io::Result<Phase> {
        match phase {
            Phase::Rendering => {
                self.console.clear();
                self.render();
                Ok(Phase::AwaitingSelection)
            }
            Phase::AwaitingSelection => {
                self.formatter.prompt("Select an option: ");
                let input = self.console.read_line()?;

                match find_action(&input) {
                    Some(item) => Ok(Phase::Executing(item.action)),
                    None => {
                        tracing::debug!(input = %input, "unrecognized menu selection");
                        self.state.message = Some(INVALID_OPTION.to_string());
                        Ok(Phase::Rendering)
                    }
                }
            }
            Phase::Executing(action) => {
                self.state.message = None;
                self.console.clear();
                self.print_header();

                match self.execute(action)? {
                    Flow::Exit => Ok(Phase::Terminated),
                    Flow::Continue => {
                        self.formatter.blank();
                        self.formatter.prompt("Press any key to continue...");
                        self.console.wait_for_key()?;
                        Ok(Phase::Rendering)
                    }
                }
            }
            Phase::Terminated => Ok(Phase::Terminated),
        }
    }

    pub fn execute(&mut self, action: Action) -> io::Result<Flow> {
        tracing::debug!(action = ?action, "executing menu action");

        match action {
            Action::Detect => self.detect(),
            Action::List => self.list(),
            Action::ExtractOne => self.extract_one()?,
            Action::ExtractAll => self.extract_all()?,
            Action::ClearExt => self.clear_extensions()?,
            Action::Exit => {
                self.exit();
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    pub fn render(&self) {
        self.print_header();
        self.formatter.print_section("MAIN MENU");
        for item in visible_actions(self.state.catalog_ready) {
            self.formatter.line(&item.menu_line());
        }
        self.formatter.blank();
        self.formatter.line("Enter bracketed text to make a selection.");
    }

    fn print_header(&self) {
        self.formatter
            .print_banner(self.state.catalog.len(), self.state.message.as_deref());
    }

    fn startup_problem(&self) -> Option<&'static str> {
        if self.config.paths.input_dir.as_os_str().is_empty() {
            Some("Input path is empty!")
        } else if self.config.paths.output_dir.as_os_str().is_empty() {
            Some("Output path is empty!")
        } else {
            None
        }
    }

    fn detect(&mut self) {
        self.formatter.print_section("DETECT ROMS");

        self.state.catalog = Vec::new();
        self.state.catalog_ready = false;

        let input_dir = &self.config.paths.input_dir;
        let outcome = match self.scanner.scan(input_dir) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "scan failed");
                self.formatter.print_user_friendly_error(&e);
                return;
            }
        };

        if let Some(created) = &outcome.created_dir {
            self.formatter.notice("Input directory does not exist!");
            self.formatter
                .line(&format!("Input directory has been created:\n{}", created.display()));
        }

        if outcome.is_empty() {
            self.formatter.notice(&detection_message(0));
            return;
        }

        self.formatter.line("Scanning for ROMs...");
        self.state.catalog = outcome.entries;
        self.state.catalog_ready = true;

        self.formatter.success("\tComplete!");
        self.formatter.blank();
        self.formatter
            .success(&detection_message(self.state.catalog.len()));
    }

    fn list(&self) {
        self.formatter.print_section("LIST ROMS");
        for (index, entry) in self.state.catalog.iter().enumerate() {
            self.formatter
                .line(&format!("[{}] - {}", index, entry.display_name));
        }
        self.formatter.blank();
        self.formatter
            .line(&format!("Listed {} ROMs", self.state.catalog.len()));
    }

    fn catalog_missing(&self) -> bool {
        if self.state.catalog.is_empty() {
            self.formatter.notice(&detection_message(0));
            return true;
        }
        false
    }

    fn extract_one(&mut self) -> io::Result<()> {
        if self.catalog_missing() {
            return Ok(());
        }

        self.list();
        self.formatter.blank();
        self.formatter.print_section("EXTRACT SINGLE ROM");
        self.formatter
            .line("Use the bracketed number. Type 'Back' to return.");

        loop {
            self.formatter
                .prompt("Which ROM would you like to extract: ");
            let input = self.console.read_line()?;

            let index = match parse_index_choice(&input, self.state.catalog.len()) {
                Ok(IndexChoice::Back) => {
                    self.formatter.line(RETURNING_TO_MENU);
                    return Ok(());
                }
                Ok(IndexChoice::Index(index)) => index,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected ROM index");
                    self.formatter.notice("Please enter a valid ROM index!");
                    continue;
                }
            };

            let entry = &self.state.catalog[index];
            self.formatter.blank();
            self.formatter
                .line(&format!("Chosen ROM: {}", entry.display_name));

            if self.confirm()? {
                let entry = &self.state.catalog[index];
                // Errors are reported through the formatter as they happen
                let _ = self.runner.extract(entry, &self.formatter);
                return Ok(());
            }

            self.formatter.line("Returning to ROM selection...");
        }
    }

    fn extract_all(&mut self) -> io::Result<()> {
        if self.catalog_missing() {
            return Ok(());
        }

        self.formatter.blank();
        self.formatter.print_section("EXTRACT ALL ROMS");
        self.formatter.line(&format!(
            "This will extract {} ROMs",
            self.state.catalog.len()
        ));

        if !self.confirm()? {
            self.formatter.line(RETURNING_TO_MENU);
            return Ok(());
        }

        let progress = self
            .runner
            .extract_all(&self.state.catalog, &self.formatter);
        self.formatter.print_batch_summary(&progress);
        Ok(())
    }

    fn clear_extensions(&mut self) -> io::Result<()> {
        let folders = match self.renamer.list_folders() {
            Ok(folders) => folders,
            Err(e) => {
                self.formatter.print_user_friendly_error(&e);
                return Ok(());
            }
        };

        self.formatter.blank();
        self.formatter
            .print_section("CLEAR OUTPUT FOLDER EXTENSIONS");
        self.formatter
            .line("This will remove any extension from the output subdirectories.");

        if !self.confirm()? {
            self.formatter.line(RETURNING_TO_MENU);
            return Ok(());
        }

        let summary = self.renamer.rename_all(&folders);
        for outcome in &summary.outcomes {
            match outcome {
                RenameOutcome::Renamed { from, to } => self.formatter.line(&format!(
                    "Folder renamed from '{}' to '{}'",
                    from.display(),
                    to.display()
                )),
                RenameOutcome::Unchanged { path } => {
                    tracing::debug!(path = %path.display(), "no extension to strip");
                }
                RenameOutcome::Failed(e) => self.formatter.print_user_friendly_error(e),
            }
        }

        self.formatter
            .success(&format!("{} changes made.", summary.renamed_count()));
        Ok(())
    }

    /// Asks until the answer is Y or N.
    fn confirm(&mut self) -> io::Result<bool> {
        loop {
            self.formatter.prompt("Is this correct? (Y/N): ");
            let input = self.console.read_line()?;

            match parse_confirmation(&input) {
                Some(answer) => return Ok(answer),
                None => self.formatter.notice("Please enter a valid response."),
            }
        }
    }

    fn exit(&self) {
        self.formatter.blank();
        self.formatter.line("Exiting AutoXiso...");
    }

    /// Reports a console read error and redraws the menu. Repeated failures
    /// are treated as closed input.
    fn read_failed(&mut self, error: io::Error, attempts: usize) -> Phase {
        tracing::warn!(error = %error, attempts, "console read failed");

        if attempts >= MAX_READ_FAILURES {
            return self.input_closed(error);
        }

        self.state.message = Some(format!("Could not read input: {}", error));
        Phase::Rendering
    }

    fn input_closed(&self, error: io::Error) -> Phase {
        tracing::debug!(error = %error, "console input ended");
        self.exit();
        Phase::Terminated
    }
}

pub fn detection_message(count: usize) -> String {
    if count == 0 {
        "No ROMs detected!".to_string()
    } else {
        format!("Detected {} ROMs", count)
    }
}
