use console::Term;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};

/// Blocking line and key input for the interactive session.
///
/// `read_line` and `wait_for_key` return `ErrorKind::UnexpectedEof` once the
/// input stream is closed.
pub trait Console {
    fn read_line(&mut self) -> io::Result<String>;
    fn wait_for_key(&mut self) -> io::Result<()>;
    fn clear(&mut self);
}

pub struct TerminalConsole {
    term: Term,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = term.is_term() && io::stdin().is_terminal();
        Self { term, interactive }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> io::Result<String> {
        read_console_line(&mut io::stdin().lock())
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        if self.interactive {
            self.term.read_key().map(|_| ())
        } else {
            self.read_line().map(|_| ())
        }
    }

    fn clear(&mut self) {
        if self.interactive {
            let _ = self.term.clear_screen();
        }
    }
}

/// Replays a fixed list of input lines. Key waits consume one line, like a
/// terminal with piped input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    key_waits: usize,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            key_waits: 0,
            clears: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn key_waits(&self) -> usize {
        self.key_waits
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<String> {
        self.lines.pop_front().ok_or_else(closed_input)
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.key_waits += 1;
        self.read_line().map(|_| ())
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}

/// Reads one line without its terminator. Bytes that are not valid UTF-8
/// are replaced rather than rejected; only a zero-byte read reports closed
/// input.
pub fn read_console_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Err(closed_input());
    }

    let line = String::from_utf8_lossy(&bytes);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn closed_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "console input closed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_lines() {
        let mut console = ScriptedConsole::new(["detect", "", "exit"]);

        assert_eq!(console.read_line().unwrap(), "detect");
        console.wait_for_key().unwrap();
        assert_eq!(console.key_waits(), 1);
        assert_eq!(console.remaining(), 1);
        assert_eq!(console.read_line().unwrap(), "exit");
    }

    #[test]
    fn test_read_console_line_replaces_invalid_utf8() {
        let mut input = io::Cursor::new(b"\xff\xfe\r\nexit\n".to_vec());

        assert_eq!(read_console_line(&mut input).unwrap(), "\u{FFFD}\u{FFFD}");
        assert_eq!(read_console_line(&mut input).unwrap(), "exit");

        let err = read_console_line(&mut input).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_read_console_line_keeps_unterminated_last_line() {
        let mut input = io::Cursor::new(b"back".to_vec());
        assert_eq!(read_console_line(&mut input).unwrap(), "back");
    }

    #[test]
    fn test_scripted_console_reports_closed_input() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = console.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert!(console.wait_for_key().is_err());
    }
}
