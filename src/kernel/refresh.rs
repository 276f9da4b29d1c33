// Multiplexed refresh engine, driven from the periodic timer ISR.
//
// Each tick draws one level: select its transistor line, shift out its
// 16-column mask, latch, advance the cursor mod 4. At 2ms per tick the
// full cube repaints 125 times a second, well past flicker fusion.
//
// tick() is non-reentrant by construction: it is only ever called from
// the single timer interrupt, and the firmware's instance lives inside
// a critical_section::Mutex static (see bin/main.rs).

use embedded_hal::digital::OutputPin;

use crate::drivers::{RowSelect, ShiftChain};
use crate::kernel::frame::FrameBuffer;
use crate::LEVELS;

/// Per-level tick period. 4 ticks x 2ms = one full cube refresh every
/// 8ms, well clear of the 50 refreshes/s flicker-fusion floor.
pub const LEVEL_TICK_US: u64 = 2_000;

pub struct Refresher<DATA, CLK, LAT, CLR, ROW> {
    chain: ShiftChain<DATA, CLK, LAT, CLR>,
    rows: RowSelect<ROW>,
    cursor: u8,
}

impl<DATA, CLK, LAT, CLR, ROW> Refresher<DATA, CLK, LAT, CLR, ROW>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LAT: OutputPin,
    CLR: OutputPin,
    ROW: OutputPin,
{
    pub fn new(chain: ShiftChain<DATA, CLK, LAT, CLR>, rows: RowSelect<ROW>) -> Self {
        Self {
            chain,
            rows,
            cursor: 0,
        }
    }

    /// Draw the level at the cursor and advance. Bounded work: 16 clock
    /// pulses plus a handful of GPIO writes, no waiting of any kind.
    pub fn tick(&mut self, frame: &FrameBuffer) {
        let level = usize::from(self.cursor);

        // cursor only ever holds values produced by the mod-4 advance
        // below, so neither lookup can fail
        let mask = frame.get(level).unwrap_or(0);
        let _ = self.rows.select(level);
        self.chain.write_frame(mask);

        self.cursor = (self.cursor + 1) % LEVELS as u8;
    }

    /// Darken the cube: no row enabled, chain cleared. Used before the
    /// timer starts and by shutdown paths.
    pub fn blank(&mut self) {
        self.rows.blank();
        self.chain.clear();
    }
}
