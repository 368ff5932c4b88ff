//! Line-oriented console I/O for the interactive session.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

/// Prompt-and-read surface the session screens talk to.
///
/// Generic over reader and writer so the whole state machine can be driven
/// from in-memory buffers in tests.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        self.writer.flush()
    }

    /// Write one line of output.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Print a prompt, then block for one line of input. The returned string
    /// has its line ending stripped but is otherwise untouched.
    pub fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            // End of input; surface it instead of looping on empty reads.
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }

    /// Block until the user acknowledges with ENTER.
    pub fn pause(&mut self) -> io::Result<()> {
        self.prompt("\nPresiona ENTER para continuar...")?;
        Ok(())
    }
}
