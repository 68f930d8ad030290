//! WASM-compatible wrapper types.

use viewfinder_core::{LumaFrame, ViewRect};
use wasm_bindgen::prelude::*;

/// A rectangle in image coordinates, for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsViewRect {
    rect: ViewRect,
}

#[wasm_bindgen]
impl JsViewRect {
    #[wasm_bindgen(constructor)]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> JsViewRect {
        JsViewRect {
            rect: ViewRect::new(left, top, right, bottom),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn left(&self) -> i32 {
        self.rect.left
    }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> i32 {
        self.rect.top
    }

    #[wasm_bindgen(getter)]
    pub fn right(&self) -> i32 {
        self.rect.right
    }

    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> i32 {
        self.rect.bottom
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 {
        self.rect.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 {
        self.rect.height()
    }
}

impl JsViewRect {
    pub(crate) fn to_core(self) -> ViewRect {
        self.rect
    }
}

impl From<ViewRect> for JsViewRect {
    fn from(rect: ViewRect) -> Self {
        Self { rect }
    }
}

/// A single-plane frame with dimensions, for JavaScript.
///
/// The pixel data lives in WASM memory. `data()` copies it out as a
/// `Uint8Array`.
#[wasm_bindgen]
pub struct JsLumaFrame {
    frame: LumaFrame,
}

#[wasm_bindgen]
impl JsLumaFrame {
    /// Frame width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    /// Frame height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    /// Returns the pixel plane as a Uint8Array (copied).
    pub fn data(&self) -> Vec<u8> {
        self.frame.data().to_vec()
    }
}

impl From<LumaFrame> for JsLumaFrame {
    fn from(frame: LumaFrame) -> Self {
        Self { frame }
    }
}
