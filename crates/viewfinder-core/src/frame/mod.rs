//! Single-plane frame buffers and their landscape-to-portrait rotation.
//!
//! Sensors deliver landscape frames. A portrait consumer needs them turned a
//! quarter turn clockwise, which this module does by index remapping with no
//! interpolation.
//!
//! # Buffer Layout
//!
//! - One byte per pixel (a luma plane, or any single 8-bit channel)
//! - Row-major, origin top-left
//! - Length must be exactly `width * height`
//!
//! # Rotation Direction
//!
//! Only the clockwise quarter turn is provided. Two calls (tracking the
//! swapped dimensions between them) give a half turn, four give back the
//! original buffer.

mod rotate;
mod types;

pub use rotate::{rotate_landscape_to_portrait, rotate_landscape_to_portrait_into};
pub use types::LumaFrame;
