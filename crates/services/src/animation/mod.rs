mod driver;
mod playback;

// Public API of the animation subsystem.
pub use crate::error::DriverError;
pub use driver::{
    DriverHandle, FrameDriver, FrameRequest, FrameScheduler, ManualScheduler, RenderedFrame,
};
pub use playback::Playback;
