//! WASM bindings for landscape-to-portrait frame rotation.

use crate::types::JsLumaFrame;
use viewfinder_core::frame::{rotate_landscape_to_portrait as core_rotate, LumaFrame};
use wasm_bindgen::prelude::*;

/// Rotate a single-plane frame a quarter turn clockwise.
///
/// The result is `height` pixels wide and `width` pixels tall; the caller
/// tracks the swap. Use [`rotate_frame`] to get the dimensions back too.
///
/// # Errors
///
/// Returns an error if a dimension is zero or `pixels.length` is not
/// `width * height`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Luma plane of a 640x480 NV21 preview frame
/// const portrait = rotate_landscape_to_portrait(nv21.subarray(0, 640 * 480), 640, 480);
/// ```
#[wasm_bindgen]
pub fn rotate_landscape_to_portrait(
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, JsValue> {
    core_rotate(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate a single-plane frame a quarter turn clockwise, returning a frame
/// that carries the swapped dimensions.
#[wasm_bindgen]
pub fn rotate_frame(pixels: &[u8], width: u32, height: u32) -> Result<JsLumaFrame, JsValue> {
    LumaFrame::new(width, height, pixels.to_vec())
        .and_then(|f| f.rotate_landscape_to_portrait())
        .map(JsLumaFrame::from)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
