//! Video bandwidth calculator.
//!
//! Works out how much bandwidth a display signal needs and which
//! DisplayPort or HDMI link versions can carry it, with or without DSC.

pub mod config;
pub mod error;
pub mod video;

pub use error::VideoError;
