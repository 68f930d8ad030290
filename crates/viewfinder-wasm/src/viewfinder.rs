//! WASM bindings for mapping viewfinder rects into image space.

use crate::types::JsViewRect;
use viewfinder_core::viewfinder::{map_view_rect_to_image_space, FrameSize, ScreenLayout};
use wasm_bindgen::prelude::*;

/// Map a rect drawn on the preview surface into captured-image coordinates.
///
/// # Arguments
///
/// * `is_landscape` - True when the UI is laid out in landscape
/// * `surface_width` / `surface_height` - Preview surface size in pixels
/// * `rect` - Selection on the preview surface
/// * `image_width` / `image_height` - Capture resolution as the sensor reports it
///
/// # Errors
///
/// Returns an error if any surface or image dimension is zero.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const crop = map_view_rect(false, 720, 1280, new JsViewRect(60, 340, 660, 940), 1920, 1080);
/// ```
#[wasm_bindgen]
pub fn map_view_rect(
    is_landscape: bool,
    surface_width: u32,
    surface_height: u32,
    rect: &JsViewRect,
    image_width: u32,
    image_height: u32,
) -> Result<JsViewRect, JsValue> {
    map_view_rect_to_image_space(
        ScreenLayout::from_is_landscape(is_landscape),
        FrameSize::new(surface_width, surface_height),
        rect.to_core(),
        FrameSize::new(image_width, image_height),
    )
    .map(JsViewRect::from)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}
