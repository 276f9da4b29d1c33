// Level-enable driver: 4 transistor base lines, at most one high.
//
// All levels share the column outputs of the shift register chain, so
// two active row lines would light both levels with the same pattern
// (ghosting). select() therefore always drops every line before
// raising the new one.

use embedded_hal::digital::OutputPin;

use crate::{LevelOutOfRange, LEVELS};

pub struct RowSelect<P> {
    rows: [P; LEVELS],
}

impl<P: OutputPin> RowSelect<P> {
    /// Takes ownership of the 4 row-enable pins and blanks them all.
    pub fn new(rows: [P; LEVELS]) -> Self {
        let mut sel = Self { rows };
        sel.blank();
        sel
    }

    /// Enable exactly one level. The clear-all-then-set order is load
    /// bearing: set-before-clear would briefly drive two levels at once.
    /// An out-of-range level is rejected before any pin is touched.
    pub fn select(&mut self, level: usize) -> Result<(), LevelOutOfRange> {
        if level >= LEVELS {
            return Err(LevelOutOfRange { level });
        }
        self.blank();
        let _ = self.rows[level].set_high();
        Ok(())
    }

    /// Drop all row lines; the cube goes dark regardless of chain state.
    pub fn blank(&mut self) {
        for row in self.rows.iter_mut() {
            let _ = row.set_low();
        }
    }
}
