//! Touch input - raw samples and the calibration that maps them onto the
//! display.
//!
//! The sensor is polled once per main-loop iteration; every sample is
//! handed to the hit test and then dropped.

pub mod xpt2046;

use crate::config::{
    TOUCH_PRESSURE_MAX, TOUCH_PRESSURE_MIN, TOUCH_X_MAX, TOUCH_X_MIN, TOUCH_Y_MAX, TOUCH_Y_MIN,
};

/// One reading in raw sensor units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    pub x: u16,
    pub y: u16,
    pub pressure: u16,
}

impl TouchSample {
    pub const fn new(x: u16, y: u16, pressure: u16) -> Self {
        Self { x, y, pressure }
    }
}

/// Source of touch samples.
pub trait TouchSensor {
    type Error;

    /// Take one sample. A lifted pen reports a pressure outside the
    /// calibrated window rather than an error.
    fn sample(&mut self) -> Result<TouchSample, Self::Error>;
}

/// Raw-to-display calibration and press threshold.
///
/// Either axis pair may be inverted (`min > max`) to correct for the way
/// the sensor is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Raw reading at display x = 0 and x = width.
    pub x_min: i32,
    pub x_max: i32,
    /// Raw reading at display y = 0 and y = height.
    pub y_min: i32,
    pub y_max: i32,
    /// Exclusive pressure bounds for a qualifying press.
    pub pressure_min: u16,
    pub pressure_max: u16,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            x_min: TOUCH_X_MIN,
            x_max: TOUCH_X_MAX,
            y_min: TOUCH_Y_MIN,
            y_max: TOUCH_Y_MAX,
            pressure_min: TOUCH_PRESSURE_MIN,
            pressure_max: TOUCH_PRESSURE_MAX,
        }
    }
}
