//! Host-side fakes for the hardware traits, shared by the unit tests.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::modem::SerialLink;
use crate::touch::{TouchSample, TouchSensor};
use crate::ui::{Surface, TextStyle};

/// Error returned by fakes configured to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault;

/// Monotonic fake time in nanoseconds, shared between fakes.
#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now_ms(&self) -> u32 {
        (self.0.get() / 1_000_000) as u32
    }

    fn advance_ns(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

/// Records the time it was asked to wait instead of waiting.
#[derive(Clone, Default)]
pub struct MockDelay {
    clock: Clock,
}

impl MockDelay {
    pub fn elapsed_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    pub fn clock(&self) -> Clock {
        self.clock.clone()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance_ns(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ns(ms as u64 * 1_000_000);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    FillRect(Rectangle, Rgb565),
    FillCircle(Point, u32, Rgb565),
    Text(String, Point, TextStyle),
}

/// Surface that logs every primitive.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub size: Size,
    pub ops: Vec<Op>,
    pub fail: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            size: Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
            ops: Vec::new(),
            fail: false,
        }
    }
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Every string drawn, with its origin, in order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Text(text, origin, _) => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    fn record(&mut self, op: Op) -> Result<(), Fault> {
        if self.fail {
            return Err(Fault);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Error = Fault;

    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Fault> {
        self.record(Op::FillRect(area, color))
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb565) -> Result<(), Fault> {
        self.record(Op::FillCircle(center, radius, color))
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: TextStyle) -> Result<(), Fault> {
        self.record(Op::Text(text.into(), origin, style))
    }
}

/// In-memory serial link with scripted input.
#[derive(Clone, Default)]
pub struct MockLink {
    input: VecDeque<u8>,
    chunk: Option<usize>,
    writes: Vec<(u32, Vec<u8>)>,
    attempts: usize,
    fail_writes: bool,
    clock: Option<Clock>,
}

impl MockLink {
    pub fn with_input(bytes: &[u8]) -> Self {
        Self {
            input: bytes.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Return at most `n` bytes per read.
    pub fn chunked(mut self, n: usize) -> Self {
        self.chunk = Some(n);
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Stamp writes with the time of `delay`.
    pub fn clocked(mut self, delay: &MockDelay) -> Self {
        self.clock = Some(delay.clock());
        self
    }

    pub fn written(&self) -> Vec<u8> {
        self.writes.iter().flat_map(|(_, w)| w.iter().copied()).collect()
    }

    pub fn written_str(&self) -> String {
        String::from_utf8_lossy(&self.written()).into_owned()
    }

    pub fn write_times_ms(&self) -> Vec<u32> {
        self.writes.iter().map(|(t, _)| *t).collect()
    }

    pub fn write_attempts(&self) -> usize {
        self.attempts
    }

    pub fn pending(&self) -> usize {
        self.input.len()
    }
}

impl SerialLink for MockLink {
    type Error = Fault;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Fault> {
        self.attempts += 1;
        if self.fail_writes {
            return Err(Fault);
        }
        let now = self.clock.as_ref().map_or(0, Clock::now_ms);
        self.writes.push((now, data.to_vec()));
        Ok(())
    }

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Fault> {
        let limit = self.chunk.unwrap_or(buf.len()).min(buf.len());
        let mut n = 0;
        while n < limit {
            match self.input.pop_front() {
                Some(b) => {
                    buf[n] = b;
                    n += 1;
                }
                None => break,
            }
        }
        Ok(n)
    }
}

/// Touch sensor replaying a script, then reporting a lifted pen.
#[derive(Clone, Default)]
pub struct ScriptedTouch {
    script: VecDeque<TouchSample>,
    sampled_at: Vec<u32>,
    clock: Option<Clock>,
}

impl ScriptedTouch {
    pub fn new(samples: impl IntoIterator<Item = TouchSample>) -> Self {
        Self {
            script: samples.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn clocked(mut self, delay: &MockDelay) -> Self {
        self.clock = Some(delay.clock());
        self
    }

    pub fn push(&mut self, sample: TouchSample) {
        self.script.push_back(sample);
    }

    pub fn sample_times_ms(&self) -> &[u32] {
        &self.sampled_at
    }
}

impl TouchSensor for ScriptedTouch {
    type Error = Fault;

    fn sample(&mut self) -> Result<TouchSample, Fault> {
        let now = self.clock.as_ref().map_or(0, Clock::now_ms);
        self.sampled_at.push(now);
        Ok(self.script.pop_front().unwrap_or_default())
    }
}
