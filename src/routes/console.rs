// src/routes/console.rs
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::SessionError;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

pub type Interrupt = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Line-oriented terminal I/O. Every wait races the interrupt future.
pub struct Console<R, W> {
    input: R,
    output: W,
    interrupt: Interrupt,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, output: W, interrupt: impl Future<Output = ()> + Send + 'static) -> Self {
        Self {
            input,
            output,
            interrupt: Box::pin(interrupt),
        }
    }

    /// A console whose interrupt never fires.
    pub fn uninterruptible(input: R, output: W) -> Self {
        Self::new(input, output, std::future::pending())
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.output.write_all(CLEAR_SCREEN.as_bytes())
    }

    /// Reads one line with surrounding whitespace removed.
    pub async fn read_line(&mut self) -> Result<String, SessionError> {
        self.output.flush()?;

        let mut line = String::new();
        let read = tokio::select! {
            biased;
            _ = &mut self.interrupt => return Err(SessionError::Interrupted),
            read = self.input.read_line(&mut line) => read?,
        };

        if read == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub async fn pause(&mut self, duration: Duration) -> Result<(), SessionError> {
        self.output.flush()?;
        if duration.is_zero() {
            return Ok(());
        }

        tokio::select! {
            biased;
            _ = &mut self.interrupt => Err(SessionError::Interrupted),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_trimmed_lines_then_reports_closed_input() {
        let mut console = Console::uninterruptible(&b"  hello \n"[..], Vec::new());
        assert_eq!(console.read_line().await.unwrap(), "hello");
        assert!(matches!(
            console.read_line().await,
            Err(SessionError::InputClosed)
        ));
    }

    #[tokio::test]
    async fn interrupt_wins_over_pending_input() {
        let (_keep_open, reader) = tokio::io::duplex(64);
        let reader = tokio::io::BufReader::new(reader);
        let mut console = Console::new(reader, Vec::new(), async {});
        assert!(matches!(
            console.read_line().await,
            Err(SessionError::Interrupted)
        ));
    }
}
