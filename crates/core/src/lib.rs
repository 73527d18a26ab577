#![forbid(unsafe_code)]

pub mod error;
pub mod grading;
pub mod model;
pub mod sim;
pub mod time;

pub use error::Error;
pub use time::Clock;
