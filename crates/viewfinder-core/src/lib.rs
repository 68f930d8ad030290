//! Viewfinder Core - Camera orientation and frame geometry
//!
//! This crate turns platform-reported camera state into the numbers a camera
//! pipeline needs:
//!
//! - `orientation` - Preview and capture rotation angles from display
//!   rotation, sensor mount angle and sensor facing
//! - `viewfinder` - Mapping a selection on the preview surface into
//!   captured-image coordinates
//! - `frame` - Rotating single-plane frame buffers from landscape to portrait
//! - `sensor` - Per-sensor configuration records
//!
//! Everything here is a pure function of its inputs: no device access, no
//! shared state, safe to call from any thread.

pub mod error;
pub mod frame;
pub mod orientation;
pub mod sensor;
pub mod viewfinder;

pub use error::{GeometryError, Result};
pub use frame::{rotate_landscape_to_portrait, rotate_landscape_to_portrait_into, LumaFrame};
pub use orientation::{
    resolve_capture_orientation, resolve_display_orientation, ContinuousOrientation,
    DisplayRotation, ExifOrientation,
};
pub use sensor::{supports_flash_mode, FlashMode, SensorDescriptor, SensorFacing};
pub use viewfinder::{map_view_rect_to_image_space, FrameSize, ScreenLayout, ViewRect};
