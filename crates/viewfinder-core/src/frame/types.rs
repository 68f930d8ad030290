//! A single-plane frame that carries its own dimensions.

use image::GrayImage;

use super::rotate::{plane_len, rotate_landscape_to_portrait};
use crate::error::{GeometryError, Result};
use crate::viewfinder::FrameSize;

/// A single 8-bit plane with its dimensions.
///
/// Unlike the bare-buffer functions, a rotated `LumaFrame` records the
/// swapped dimensions itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl LumaFrame {
    /// Wrap a buffer, checking that its length is `width * height`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = plane_len(width, height)?;
        if data.len() != expected {
            return Err(GeometryError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take the luma plane from the front of a planar YUV buffer
    /// (NV21, NV12, I420 and friends all start with it).
    pub fn from_yuv_luma(width: u32, height: u32, yuv: &[u8]) -> Result<Self> {
        let expected = plane_len(width, height)?;
        let luma = yuv.get(..expected).ok_or(GeometryError::SizeMismatch {
            width,
            height,
            expected,
            actual: yuv.len(),
        })?;
        Self::new(width, height, luma.to_vec())
    }

    /// Create a frame from an `image::GrayImage`.
    pub fn from_gray_image(img: GrayImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an `image::GrayImage` for further processing.
    pub fn to_gray_image(&self) -> Option<GrayImage> {
        GrayImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Rotate a quarter turn clockwise; the result is `height` wide and
    /// `width` tall.
    pub fn rotate_landscape_to_portrait(&self) -> Result<Self> {
        let data = rotate_landscape_to_portrait(&self.data, self.width, self.height)?;
        Ok(Self {
            width: self.height,
            height: self.width,
            data,
        })
    }
}
