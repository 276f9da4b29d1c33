// Serial bring-up console: byte-oriented commands over any embedded-io
// port (USB-Serial-JTAG on the reference board).
//
// Prompt '>' before every command, bracket echo '[x]' on success, '?'
// on a rejected one. Commands:
//   'L' <level> <lo> <hi>   set one level's mask (little-endian bytes)
//   'A' <lo> <hi>           set all levels
//   'C'                     clear the cube
//   'S'                     dump all 4 masks, 8 raw bytes, level 0 first
//
// Reads block; the refresh ISR keeps scanning underneath, so the cube
// stays lit while the console waits for input.

use embedded_io::{Read, Write};
use log::{info, warn};

use crate::kernel::frame::FrameBuffer;

pub struct Console<S> {
    port: S,
}

impl<S: Read + Write> Console<S> {
    pub fn new(port: S) -> Self {
        Self { port }
    }

    /// Serve commands until the port reports end-of-stream.
    pub fn run(&mut self, frame: &FrameBuffer) -> Result<(), S::Error> {
        info!("console: session open");
        while self.handle_one(frame)? {}
        info!("console: session closed");
        Ok(())
    }

    /// Prompt, read, execute one command. `Ok(false)` once the port
    /// runs out of bytes (mid-command included: a truncated command is
    /// dropped without an echo).
    pub fn handle_one(&mut self, frame: &FrameBuffer) -> Result<bool, S::Error> {
        self.port.write_all(b">")?;
        let Some([op]) = self.read_args::<1>()? else {
            return Ok(false);
        };

        let accepted = match op {
            b'L' => {
                let Some([level, lo, hi]) = self.read_args::<3>()? else {
                    return Ok(false);
                };
                let mask = u16::from_le_bytes([lo, hi]);
                match frame.set_level(usize::from(level), mask) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("console: {e}");
                        false
                    }
                }
            }
            b'A' => {
                let Some([lo, hi]) = self.read_args::<2>()? else {
                    return Ok(false);
                };
                frame.set_all(u16::from_le_bytes([lo, hi]));
                true
            }
            b'C' => {
                frame.clear();
                true
            }
            b'S' => {
                for mask in frame.snapshot() {
                    self.port.write_all(&mask.to_le_bytes())?;
                }
                true
            }
            other => {
                warn!("console: unknown opcode 0x{other:02X}");
                false
            }
        };

        if accepted {
            self.port.write_all(&[b'[', op, b']'])?;
        } else {
            self.port.write_all(b"?")?;
        }
        Ok(true)
    }

    /// Read exactly N bytes, `None` if the stream ends first.
    fn read_args<const N: usize>(&mut self) -> Result<Option<[u8; N]>, S::Error> {
        let mut args = [0u8; N];
        for slot in args.iter_mut() {
            let mut buf = [0u8; 1];
            if self.port.read(&mut buf)? == 0 {
                return Ok(None);
            }
            *slot = buf[0];
        }
        Ok(Some(args))
    }
}
