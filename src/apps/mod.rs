// CubeControl callers: everything here mutates the framebuffer and
// nothing else. Hardware-agnostic via embedded-hal/embedded-io traits.

pub mod console;
pub mod demo;

pub use console::Console;
