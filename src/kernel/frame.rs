// Cube framebuffer shared between the foreground writer and the refresh ISR.
//
// One u16 bitmask per level: bit b of level L = LED (L, column b) lit.
// Every access runs inside critical_section::with, so the ISR can never
// observe a mask whose halves came from different writes, and multi-level
// operations (set_all, snapshot) stay consistent as a unit.

use core::cell::Cell;

use critical_section::Mutex;

use crate::{LevelOutOfRange, LEVELS};

/// The firmware's one cube image. Written by apps, read by the refresh ISR.
pub static FRAME: FrameBuffer = FrameBuffer::new();

pub struct FrameBuffer {
    levels: Mutex<Cell<[u16; LEVELS]>>,
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            levels: Mutex::new(Cell::new([0; LEVELS])),
        }
    }

    /// Overwrite one level's bitmask. Out-of-range levels are rejected
    /// without touching any stored state.
    pub fn set_level(&self, level: usize, mask: u16) -> Result<(), LevelOutOfRange> {
        if level >= LEVELS {
            return Err(LevelOutOfRange { level });
        }
        critical_section::with(|cs| {
            let cell = self.levels.borrow(cs);
            let mut levels = cell.get();
            levels[level] = mask;
            cell.set(levels);
        });
        Ok(())
    }

    /// Apply the same bitmask to all 4 levels in one critical section.
    pub fn set_all(&self, mask: u16) {
        critical_section::with(|cs| {
            self.levels.borrow(cs).set([mask; LEVELS]);
        });
    }

    pub fn clear(&self) {
        self.set_all(0);
    }

    /// Read one level's bitmask. `None` for out-of-range levels.
    pub fn get(&self, level: usize) -> Option<u16> {
        if level >= LEVELS {
            return None;
        }
        Some(critical_section::with(|cs| self.levels.borrow(cs).get()[level]))
    }

    /// Consistent copy of all 4 levels, taken in a single critical section.
    pub fn snapshot(&self) -> [u16; LEVELS] {
        critical_section::with(|cs| self.levels.borrow(cs).get())
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
