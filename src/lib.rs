// Controller for a 4x4x4 LED cube: two daisy-chained 74HC595s drive the
// 16 columns of one level, a timer ISR scans the 4 levels (POV multiplexing).

#![no_std]

use core::fmt;

pub mod apps;
#[cfg(feature = "esp32c3")]
pub mod board;
pub mod drivers;
pub mod kernel;

/// Number of horizontally scanned levels.
pub const LEVELS: usize = 4;

/// LEDs per level, one bit each across the two shift register stages.
pub const LEVEL_LEDS: usize = 16;

/// Rejected level index. Carries the offending value for the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutOfRange {
    pub level: usize,
}

impl fmt::Display for LevelOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {} out of range 0..{}", self.level, LEVELS)
    }
}
