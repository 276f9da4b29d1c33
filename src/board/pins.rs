//! GPIO |    Function    |      Notes
//! -----+----------------+------------------------------------------
//!  0   | ROW0 enable    | BC337 base, bottom level
//!  1   | ROW1 enable    | BC337 base
//!  3   | ROW2 enable    | BC337 base
//! 10   | ROW3 enable    | BC337 base, top level
//!  4   | 595 /MR        | Master clear, active low
//!  5   | 595 DS         | Serial data into the first register
//!  6   | 595 SHCP       | Shift clock, both registers
//!  7   | 595 STCP       | Storage (latch) clock, both registers
//!
//! GPIO2/8/9 are ESP32-C3 strapping pins and stay unconnected. The
//! console rides the built-in USB-Serial-JTAG, no GPIO needed.

// ----- Row-enable transistors -----
pub const ROW0: u8 = 0;
pub const ROW1: u8 = 1;
pub const ROW2: u8 = 3;
pub const ROW3: u8 = 10;

// ----- 74HC595 chain -----
pub const SR_CLEAR: u8 = 4;
pub const SR_DATA: u8 = 5;
pub const SR_CLOCK: u8 = 6;
pub const SR_LATCH: u8 = 7;
