// Power-on demo patterns. Sample framebuffer writers only — nothing
// here touches the wire protocol; the refresh ISR does the drawing.

use embedded_hal::delay::DelayNs;

use crate::kernel::frame::FrameBuffer;
use crate::LEVELS;

const SWEEP_STEP_MS: u32 = 100;
const COUNT_STEP_MS: u32 = 10;
const BOUNCE_STEP_MS: u32 = 60;

/// Light each level fully, one at a time, bottom to top. The classic
/// first-boot check that every column driver and row transistor works.
pub fn lamp_test<D: DelayNs>(frame: &FrameBuffer, delay: &mut D) {
    for level in 0..LEVELS {
        frame.clear();
        let _ = frame.set_level(level, 0xFFFF);
        delay.delay_ms(SWEEP_STEP_MS);
    }
    frame.set_all(0xFFFF);
    delay.delay_ms(4 * SWEEP_STEP_MS);
    frame.clear();
}

/// Binary counter on the bottom level, walking every column combination
/// of the first register stage.
pub fn count_up<D: DelayNs>(frame: &FrameBuffer, delay: &mut D) {
    for value in 0..=0xFFu16 {
        let _ = frame.set_level(0, value);
        delay.delay_ms(COUNT_STEP_MS);
    }
    frame.clear();
}

/// A full lit plane bouncing bottom-to-top-to-bottom.
pub fn plane_bounce<D: DelayNs>(frame: &FrameBuffer, delay: &mut D, round_trips: usize) {
    let up = 0..LEVELS;
    let down = (1..LEVELS - 1).rev();
    let path: [usize; 6] = {
        let mut path = [0; 6];
        for (slot, level) in path.iter_mut().zip(up.chain(down)) {
            *slot = level;
        }
        path
    };

    for _ in 0..round_trips {
        for &level in path.iter() {
            frame.clear();
            let _ = frame.set_level(level, 0xFFFF);
            delay.delay_ms(BOUNCE_STEP_MS);
        }
    }
    frame.clear();
}
