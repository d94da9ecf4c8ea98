use std::io::{BufRead, Write};

use crate::util::errors::Result;


/// Nine bytes of input plus a terminator.
pub const CHOICE_BUFFER_SIZE: usize = 10;
const CHOICE_CAPACITY: usize = CHOICE_BUFFER_SIZE - 1;


pub struct InteractiveShell<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}


impl<R: BufRead, W: Write> InteractiveShell<R, W> {
    pub fn new(reader: R, writer: W) -> InteractiveShell<R, W> {
        return InteractiveShell {
            reader: reader,
            writer: writer,
        }
    }

    pub fn output(&mut self, output: &str) -> Result<()> {
        writeln!(self.writer, "{}", output)?;
        return Ok(());
    }

    pub fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        return Ok(());
    }

    /// Writes raw bytes followed by a newline, without any decoding.
    pub fn output_bytes(&mut self, output: &[u8]) -> Result<()> {
        self.writer.write_all(output)?;
        self.writer.write_all(b"\n")?;
        return Ok(());
    }

    /// Reads one bounded chunk of input: at most nine bytes, stopping after a
    /// newline if one comes first. Anything past nine bytes stays buffered for
    /// the next call. One trailing `\n` is stripped; the bytes are otherwise
    /// untouched. Returns `None` once the input is exhausted.
    pub fn read_choice(&mut self) -> Result<Option<Vec<u8>>> {
        let mut chunk: Vec<u8> = Vec::with_capacity(CHOICE_CAPACITY);
        while chunk.len() < CHOICE_CAPACITY {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                break;
            }
            let room = CHOICE_CAPACITY - chunk.len();
            let window = &available[..available.len().min(room)];
            let (taken, found_newline) = match window.iter().position(|b| *b == b'\n') {
                Some(i) => (i + 1, true),
                None => (window.len(), false),
            };
            chunk.extend_from_slice(&window[..taken]);
            self.reader.consume(taken);
            if found_newline {
                break;
            }
        }
        if chunk.is_empty() {
            return Ok(None);
        }
        if chunk.last() == Some(&b'\n') {
            chunk.pop();
        }
        return Ok(Some(chunk));
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        return self.writer;
    }
}
