// Hardware drivers — chip-level and protocol-level, board-independent.
//
// Both drivers are generic over embedded-hal output pins; only pin
// assignments (in board/) are board-specific, so the same code runs
// against mock pins in the tests.

pub mod rows;
pub mod shift;

#[cfg(test)]
pub(crate) mod testpin;

pub use rows::RowSelect;
pub use shift::ShiftChain;
