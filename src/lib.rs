#![no_std]

pub mod animation;
pub mod color;
pub mod control;
pub mod gamma;
pub mod input;
pub mod manager;
pub mod math8;

pub use animation::{Animation, AnimationId, AnimationSlot};
pub use color::{Hsv, Palette16, Rgb};
pub use control::StripControl;
pub use gamma::{GAMMA8, correct, gamma8};
pub use input::{InputEvent, InputQueue, InputReceiver, InputSender};
pub use manager::{FRAME_INTERVAL, LedManager, ManagerConfig};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait and treats a call to
/// [`OutputDriver::write`] as a bounded-latency synchronous bus write.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
