//! Viewfinder WASM - WebAssembly bindings for viewfinder-core
//!
//! This crate exposes the orientation, viewfinder and frame operations to a
//! JavaScript host, which plays the platform role: it reports display
//! rotation, sensor facing and mount angle, and hands over raw frames.
//!
//! # Module Structure
//!
//! - `orientation` - Preview and capture rotation angles
//! - `viewfinder` - Preview-surface rect to image-space rect mapping
//! - `frame` - Landscape-to-portrait frame rotation
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { display_orientation, rotate_landscape_to_portrait } from '@viewfinder/wasm';
//!
//! await init();
//!
//! const angle = display_orientation(screen.orientation.angle, 90, false);
//! const portrait = rotate_landscape_to_portrait(luma, 640, 480);
//! ```

use wasm_bindgen::prelude::*;

mod frame;
mod orientation;
mod types;
mod viewfinder;

pub use frame::{rotate_frame, rotate_landscape_to_portrait};
pub use orientation::{
    capture_orientation, capture_orientation_for_sensor, display_orientation,
    display_orientation_for_sensor, exif_orientation_for_rotation,
};
pub use types::{JsLumaFrame, JsViewRect};
pub use viewfinder::map_view_rect;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
