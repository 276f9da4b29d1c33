// Cube state and the refresh engine.
//
// frame:   the shared framebuffer (foreground writes, ISR reads)
// refresh: the per-tick scan of one level out to the hardware

pub mod frame;
pub mod refresh;

pub use frame::{FrameBuffer, FRAME};
pub use refresh::{Refresher, LEVEL_TICK_US};
