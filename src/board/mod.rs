//! 4x4x4 LED cube controller board (ESP32-C3)
//!
//! Maps physical hardware to named subsystems so the core never sees
//! GPIO numbers: the 74HC595 chain and the four row transistors become
//! a ready-to-tick [`Refresher`], the USB-Serial-JTAG port becomes the
//! console's byte stream.

pub mod pins;

use esp_hal::{
    gpio::{Level, Output, OutputConfig},
    peripherals::Peripherals,
    usb_serial_jtag::UsbSerialJtag,
    Blocking,
};

use crate::drivers::{RowSelect, ShiftChain};
use crate::kernel::Refresher;

// Type Aliases
pub type CubeRefresher =
    Refresher<Output<'static>, Output<'static>, Output<'static>, Output<'static>, Output<'static>>;
pub type ConsolePort = UsbSerialJtag<'static, Blocking>;

/// Complete board hardware, ready for the timer ISR and the main loop.
pub struct Board {
    pub refresher: CubeRefresher,
    pub console: ConsolePort,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        // Chain control lines idle low; master clear idles released
        // (high, it is active low). ShiftChain::new blanks the chain.
        let data = Output::new(p.GPIO5, Level::Low, OutputConfig::default());
        let clock = Output::new(p.GPIO6, Level::Low, OutputConfig::default());
        let latch = Output::new(p.GPIO7, Level::Low, OutputConfig::default());
        let clear = Output::new(p.GPIO4, Level::High, OutputConfig::default());
        let chain = ShiftChain::new(data, clock, latch, clear);

        // Row transistors off until the first refresh tick.
        let rows = RowSelect::new([
            Output::new(p.GPIO0, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO1, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO3, Level::Low, OutputConfig::default()),
            Output::new(p.GPIO10, Level::Low, OutputConfig::default()),
        ]);

        let console = UsbSerialJtag::new(p.USB_DEVICE);

        Board {
            refresher: Refresher::new(chain, rows),
            console,
        }
    }
}
