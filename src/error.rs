//! Unified error type for callpad.
//!
//! We avoid `alloc` - all error variants carry no data, so the enum stays
//! `Copy` and cheap to log.  Implements `defmt::Format` for on-target
//! logging when the `defmt` feature is enabled.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Drawing on the display surface failed.
    Display,

    /// Reading the touch controller failed.
    Touch,

    /// Writing to or reading from the modem link failed.
    Modem,

    /// Writing to or reading from the local console failed.
    Console,

    /// A command line did not fit its fixed-size buffer.
    BufferOverflow,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::Display => "display surface error",
            Error::Touch => "touch sensor error",
            Error::Modem => "modem link error",
            Error::Console => "console link error",
            Error::BufferOverflow => "command buffer overflow",
        };
        f.write_str(msg)
    }
}
