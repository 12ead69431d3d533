pub mod output;
pub mod terminal;

pub use output::{OutputFormatter, OutputMode};
pub use terminal::{Console, ScriptedConsole, TerminalConsole};
