//! Bounded console ⇄ modem bridge.
//!
//! Runs for a fixed window after each command, copying whatever bytes are
//! pending in either direction.  It stops when the window elapses even if
//! bytes are still buffered.

use embedded_hal::delay::DelayNs;

use crate::config::RELAY_STEP_MS;
use crate::error::Error;
use crate::modem::SerialLink;

/// Per-step transfer chunk.
const CHUNK: usize = 64;

/// Bytes moved during one relay window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayStats {
    /// Console → modem.
    pub to_modem: usize,
    /// Modem → console.
    pub to_console: usize,
}

/// Relay bytes between `console` and `modem` for `window_ms`.
///
/// The window is measured in [`RELAY_STEP_MS`] delay steps only. Time
/// spent inside the links' `read_available`/`write_all` is not counted, so
/// a slow link stretches the wall-clock window past `window_ms`.
///
/// Transport errors do not end the window early; the first one is
/// returned once it has elapsed.
pub fn relay<C, M, D>(
    console: &mut C,
    modem: &mut M,
    delay: &mut D,
    window_ms: u32,
) -> Result<RelayStats, Error>
where
    C: SerialLink,
    M: SerialLink,
    D: DelayNs,
{
    let mut stats = RelayStats::default();
    let mut first_error = None;
    let mut buf = [0u8; CHUNK];
    let mut elapsed = 0;

    while elapsed < window_ms {
        match pump(console, Error::Console, modem, Error::Modem, &mut buf) {
            Ok(n) => stats.to_modem += n,
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
        match pump(modem, Error::Modem, console, Error::Console, &mut buf) {
            Ok(n) => stats.to_console += n,
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }

        delay.delay_ms(RELAY_STEP_MS);
        elapsed += RELAY_STEP_MS;
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(stats),
    }
}

/// Move one chunk of pending bytes from `from` to `to`.
fn pump<F, T>(from: &mut F, from_err: Error, to: &mut T, to_err: Error, buf: &mut [u8]) -> Result<usize, Error>
where
    F: SerialLink,
    T: SerialLink,
{
    let n = from.read_available(buf).map_err(|_| from_err)?;
    if n > 0 {
        to.write_all(&buf[..n]).map_err(|_| to_err)?;
    }
    Ok(n)
}
