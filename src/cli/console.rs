use std::io::{self, BufRead, Write};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    QueueableCommand,
};

/// Text shown while an action waits for acknowledgement.
pub const PAUSE_PROMPT: &str = "Press [Enter] to continue...";

/// The interactive streams shared by the menu and the actions it runs.
///
/// Input is consumed one line at a time; output is any sink, so a session can
/// be driven by scripted input and captured into a buffer.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> Console<'a> {
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Reads one line without its terminator; `None` once input is exhausted.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// stray keystroke only produces an unparseable selection.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        while matches!(buffer.last(), Some(b'\n' | b'\r')) {
            buffer.pop();
        }
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }

    /// Writes `marker` without a newline, flushes, and waits for a line.
    pub fn prompt(&mut self, marker: &str) -> io::Result<Option<String>> {
        write!(self.output, "{marker}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Blocks until the user acknowledges with Enter. End of input counts as
    /// acknowledgement.
    pub fn pause(&mut self) -> io::Result<()> {
        self.prompt(PAUSE_PROMPT)?;
        Ok(())
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.output
            .queue(terminal::Clear(ClearType::All))?
            .queue(cursor::MoveTo(0, 0))?;
        self.output.flush()
    }
}

impl Console<'static> {
    /// Console bound to the process stdin and stdout.
    ///
    /// Stdin is read through its locked buffer, so input typed ahead while a
    /// tool is starting may already sit in that buffer and be read as the next
    /// selection instead of reaching the tool.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl Write for Console<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_terminators() {
        let mut sink = Vec::new();
        let mut console = Console::new(Cursor::new("1\r\n2\n"), &mut sink);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("2"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let mut sink = Vec::new();
        let input = Cursor::new(vec![0xff, 0xfe, b'\n', b'1', b'\n']);
        let mut console = Console::new(input, &mut sink);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("\u{fffd}\u{fffd}"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn prompt_writes_marker_before_reading() {
        let mut sink = Vec::new();
        {
            let mut console = Console::new(Cursor::new("x\n"), &mut sink);
            assert_eq!(console.prompt(">> ").unwrap().as_deref(), Some("x"));
        }
        assert_eq!(String::from_utf8(sink).unwrap(), ">> ");
    }

    #[test]
    fn pause_consumes_one_line() {
        let mut sink = Vec::new();
        {
            let mut console = Console::new(Cursor::new("\nnext\n"), &mut sink);
            console.pause().unwrap();
            assert_eq!(console.read_line().unwrap().as_deref(), Some("next"));
        }
        assert_eq!(String::from_utf8(sink).unwrap(), PAUSE_PROMPT);
    }

    #[test]
    fn pause_tolerates_closed_input() {
        let mut sink = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut sink);
        console.pause().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn clear_screen_emits_escape_sequence() {
        let mut sink = Vec::new();
        {
            let mut console = Console::new(Cursor::new(""), &mut sink);
            console.clear_screen().unwrap();
        }
        assert!(sink.starts_with(b"\x1b["));
    }
}
