// Bit-banged link to the two daisy-chained 74HC595s (board-independent).
//
// One level's 16 columns sit on the chain's parallel outputs: the first
// register holds columns 0-7, the second 8-15. Bytes clock in LSB-first,
// low byte first; outputs change only on the latch pulse, so a frame
// becomes visible atomically.

use embedded_hal::digital::OutputPin;

/// Registers in the chain. A latch is only meaningful after exactly this
/// many `write_byte` calls; `write_frame` enforces that.
pub const CHAIN_LEN: usize = 2;

pub struct ShiftChain<DATA, CLK, LAT, CLR> {
    data: DATA,
    clock: CLK,
    latch: LAT,
    clear: CLR,
}

impl<DATA, CLK, LAT, CLR> ShiftChain<DATA, CLK, LAT, CLR>
where
    DATA: OutputPin,
    CLK: OutputPin,
    LAT: OutputPin,
    CLR: OutputPin,
{
    /// Takes ownership of the four control lines and drives them to the
    /// idle state (data/clock/latch low, active-low clear released),
    /// then blanks the chain so no stale power-on garbage is lit.
    pub fn new(data: DATA, clock: CLK, latch: LAT, clear: CLR) -> Self {
        let mut chain = Self {
            data,
            clock,
            latch,
            clear,
        };
        let _ = chain.latch.set_low();
        let _ = chain.clock.set_low();
        let _ = chain.data.set_low();
        let _ = chain.clear.set_high();
        chain.clear();
        chain
    }

    /// Clock one byte into the chain, LSB first. The data line is left
    /// low afterwards. Bits shift toward the far register, so callers
    /// write the low byte of a level mask before the high byte.
    pub fn write_byte(&mut self, value: u8) {
        for bit in 0..8 {
            if value & (1 << bit) != 0 {
                let _ = self.data.set_high();
            } else {
                let _ = self.data.set_low();
            }
            let _ = self.clock.set_high();
            let _ = self.clock.set_low();
        }
        let _ = self.data.set_low();
    }

    /// Pulse the storage-register clock: shifted-in bits appear on the
    /// parallel outputs.
    pub fn latch(&mut self) {
        let _ = self.latch.set_high();
        let _ = self.latch.set_low();
    }

    /// Pulse the active-low master clear, then latch the blanked state
    /// through to the outputs.
    pub fn clear(&mut self) {
        let _ = self.clear.set_low();
        let _ = self.clear.set_high();
        self.latch();
    }

    /// Shift out a full 16-column frame and latch it: low byte, high
    /// byte, one latch pulse. The refresh path only ever uses this, so
    /// a partial write followed by a latch cannot happen there.
    pub fn write_frame(&mut self, mask: u16) {
        self.write_byte(mask as u8);
        self.write_byte((mask >> 8) as u8);
        self.latch();
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::drivers::testpin::{clocked_bits, edge_log, latch_positions, EdgeLog, Line, LogPin};

    fn chain(log: &EdgeLog) -> ShiftChain<LogPin, LogPin, LogPin, LogPin> {
        let chain = ShiftChain::new(
            LogPin::new(Line::Data, log),
            LogPin::new(Line::Clock, log),
            LogPin::new(Line::Latch, log),
            LogPin::new(Line::Clear, log),
        );
        // drop construction-time edges; tests only care what follows
        log.borrow_mut().clear();
        chain
    }

    fn wire_bits(mask: u16) -> Vec<bool> {
        // low byte then high byte, LSB-first within each
        (0..8)
            .map(|b| mask & (1 << b) != 0)
            .chain((8..16).map(|b| mask & (1 << b) != 0))
            .collect()
    }

    #[test]
    fn write_byte_is_lsb_first() {
        let log = edge_log();
        let mut chain = chain(&log);

        chain.write_byte(0b1000_0001);
        let bits = clocked_bits(&log);
        assert_eq!(bits.len(), 8);
        assert!(bits[0], "bit 0 must go out first");
        assert!(bits[7], "bit 7 must go out last");
        assert!(bits[1..7].iter().all(|&b| !b));
    }

    #[test]
    fn write_byte_leaves_data_line_low() {
        let log = edge_log();
        let mut chain = chain(&log);

        chain.write_byte(0xFF);
        let last_data = log
            .borrow()
            .iter()
            .rev()
            .find(|(line, _)| *line == Line::Data)
            .map(|&(_, state)| state);
        assert_eq!(last_data, Some(false));
    }

    #[test]
    fn write_frame_emits_low_byte_high_byte_then_latch() {
        let log = edge_log();
        let mut chain = chain(&log);

        chain.write_frame(0xBEEF);
        assert_eq!(clocked_bits(&log), wire_bits(0xBEEF));
        // single latch pulse, after all 16 clocks
        assert_eq!(latch_positions(&log), [16]);
    }

    #[test]
    fn construction_blanks_the_chain() {
        let log = edge_log();
        let _chain = ShiftChain::new(
            LogPin::new(Line::Data, &log),
            LogPin::new(Line::Clock, &log),
            LogPin::new(Line::Latch, &log),
            LogPin::new(Line::Clear, &log),
        );

        let edges = log.borrow();
        // clear pulsed low then released
        let clear_low = edges.iter().position(|&e| e == (Line::Clear, false));
        let clear_high_after = edges
            .iter()
            .rposition(|&e| e == (Line::Clear, true))
            .unwrap();
        let clear_low = clear_low.expect("clear line never pulsed");
        assert!(clear_low < clear_high_after);
        // followed by a latch pulse making the blank state visible
        let latch_high = edges.iter().rposition(|&e| e == (Line::Latch, true)).unwrap();
        assert!(latch_high > clear_high_after);
    }
}
