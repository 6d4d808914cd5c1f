//! Cellular modem subsystem - AT command link and call sequencing.
//!
//! The modem hangs off a UART and speaks line-oriented AT commands.  Only
//! two are used:
//!
//! - `ATD<number>;` - place a voice call
//! - `ATH`          - hang up
//!
//! Responses are never parsed.  After each command the modem's output is
//! relayed to the local console (and console input to the modem) for a
//! short settle window so an operator can watch and intervene.

pub mod call;
pub mod relay;

use core::fmt::Write as _;

use heapless::String;

use crate::config::{LINE_TERMINATOR, MAX_COMMAND_LEN};
use crate::error::Error;

/// Byte-oriented duplex serial channel (modem or console).
pub trait SerialLink {
    type Error;

    /// Write every byte of `data`, blocking until queued.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Copy whatever bytes are available right now into `buf` without
    /// waiting. Returns 0 when nothing is pending.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Adapts a blocking `embedded-io` port to [`SerialLink`].
///
/// `ReadReady` decides whether a read would block; only then is `read`
/// called.
pub struct IoLink<T> {
    port: T,
}

impl<T> IoLink<T> {
    pub fn new(port: T) -> Self {
        Self { port }
    }

    pub fn into_inner(self) -> T {
        self.port
    }
}

impl<T> SerialLink for IoLink<T>
where
    T: embedded_io::Read + embedded_io::ReadReady + embedded_io::Write,
{
    type Error = T::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        embedded_io::Write::write_all(&mut self.port, data)?;
        embedded_io::Write::flush(&mut self.port)
    }

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() || !embedded_io::ReadReady::read_ready(&mut self.port)? {
            return Ok(0);
        }
        embedded_io::Read::read(&mut self.port, buf)
    }
}

/// A complete command line, terminator included.
pub type CommandLine = String<MAX_COMMAND_LEN>;

/// `ATD<number>;` followed by the line terminator.
pub fn dial_command(number: &str) -> Result<CommandLine, Error> {
    let mut line = CommandLine::new();
    write!(line, "ATD{};{}", number, LINE_TERMINATOR).map_err(|_| Error::BufferOverflow)?;
    Ok(line)
}

/// `ATH` followed by the line terminator.
pub fn hangup_command() -> CommandLine {
    let mut line = CommandLine::new();
    // Fixed 5-byte line, always fits.
    let _ = write!(line, "ATH{}", LINE_TERMINATOR);
    line
}
