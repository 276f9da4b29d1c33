// Recording GPIO mock shared by the driver tests.
//
// All pins of one harness append (line, state) edges to a single log so
// ordering ACROSS lines is assertable: clock-vs-data interleaving for
// bit decoding, latch placement, clear-before-set on the row lines.

extern crate std;

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Latch,
    Clear,
    Row(usize),
}

pub type EdgeLog = Rc<RefCell<Vec<(Line, bool)>>>;

pub fn edge_log() -> EdgeLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct LogPin {
    line: Line,
    log: EdgeLog,
}

impl LogPin {
    pub fn new(line: Line, log: &EdgeLog) -> Self {
        Self {
            line,
            log: Rc::clone(log),
        }
    }
}

impl ErrorType for LogPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for LogPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.line, true));
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push((self.line, false));
        Ok(())
    }
}

/// Bits sampled on the data line at every rising clock edge, in wire order.
pub fn clocked_bits(log: &EdgeLog) -> Vec<bool> {
    let mut data = false;
    let mut bits = Vec::new();
    for &(line, state) in log.borrow().iter() {
        match line {
            Line::Data => data = state,
            Line::Clock if state => bits.push(data),
            _ => {}
        }
    }
    bits
}

/// Indices of latch rising edges, counted in clock pulses already emitted.
pub fn latch_positions(log: &EdgeLog) -> Vec<usize> {
    let mut clocks = 0;
    let mut positions = Vec::new();
    for &(line, state) in log.borrow().iter() {
        match line {
            Line::Clock if state => clocks += 1,
            Line::Latch if state => positions.push(clocks),
            _ => {}
        }
    }
    positions
}

/// Replay row-line edges, returning the set of high rows after every edge.
pub fn row_states(log: &EdgeLog) -> Vec<[bool; 4]> {
    let mut rows = [false; 4];
    let mut states = Vec::new();
    for &(line, state) in log.borrow().iter() {
        if let Line::Row(n) = line {
            rows[n] = state;
            states.push(rows);
        }
    }
    states
}
