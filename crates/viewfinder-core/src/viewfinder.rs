//! Mapping viewfinder selections from the preview surface into image space.
//!
//! Camera sensors always deliver landscape frames. When the UI is laid out
//! in portrait, the preview surface's horizontal axis runs along the image's
//! height, so the scale factors swap.
//!
//! # Coordinate System
//!
//! - Integer pixel coordinates, origin top-left
//! - Edges are scaled by multiplying first and dividing second, truncating
//!   toward zero
//! - No clamping: a rect outside the surface maps outside the image

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// How the UI is currently laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenLayout {
    #[default]
    Landscape,
    Portrait,
}

impl ScreenLayout {
    pub fn from_is_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            ScreenLayout::Landscape
        } else {
            ScreenLayout::Portrait
        }
    }

    /// Guess the layout from a surface: wider than tall is landscape,
    /// anything else (square included) is portrait.
    pub fn from_surface(surface: FrameSize) -> Self {
        Self::from_is_landscape(surface.width > surface.height)
    }

    pub fn is_landscape(self) -> bool {
        self == ScreenLayout::Landscape
    }
}

/// Width and height in pixels of a surface or an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The same size with width and height exchanged.
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(GeometryError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Axis-aligned rectangle with `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct ViewRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ViewRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rect covering a whole surface.
    pub fn from_size(size: FrameSize) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::new(0, 0, clamp(size.width), clamp(size.height))
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Map a rect on the preview surface into the coordinates of a captured image.
///
/// # Arguments
///
/// * `layout` - Current UI layout
/// * `surface` - Size of the preview surface the rect was drawn on
/// * `rect` - Selection in surface coordinates
/// * `image` - Resolution of the captured image, as the sensor reports it
///
/// # Returns
///
/// The rect scaled into image space:
///
/// - Landscape: x edges scale by `image.width / surface.width`, y edges by
///   `image.height / surface.height`
/// - Portrait: x edges scale by `image.height / surface.width`, y edges by
///   `image.width / surface.height`
///
/// # Errors
///
/// `InvalidDimension` if any surface or image dimension is zero.
pub fn map_view_rect_to_image_space(
    layout: ScreenLayout,
    surface: FrameSize,
    rect: ViewRect,
    image: FrameSize,
) -> Result<ViewRect> {
    let surface = surface.validate()?;
    let image = image.validate()?;

    // Landscape frames under a portrait UI: the axes swap.
    let target = match layout {
        ScreenLayout::Landscape => image,
        ScreenLayout::Portrait => image.transposed(),
    };

    Ok(ViewRect {
        left: scale_edge(rect.left, target.width, surface.width),
        top: scale_edge(rect.top, target.height, surface.height),
        right: scale_edge(rect.right, target.width, surface.width),
        bottom: scale_edge(rect.bottom, target.height, surface.height),
    })
}

/// `value * numerator / denominator`, truncated toward zero.
///
/// Saturates at the `i32` range when an oversized rect scales past it.
#[inline]
fn scale_edge(value: i32, numerator: u32, denominator: u32) -> i32 {
    let scaled = i64::from(value) * i64::from(numerator) / i64::from(denominator);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_surface_identity() {
        let surface = FrameSize::new(640, 480);
        let rect = ViewRect::from_size(surface);
        let mapped =
            map_view_rect_to_image_space(ScreenLayout::Landscape, surface, rect, surface).unwrap();
        assert_eq!(mapped, ViewRect::new(0, 0, 640, 480));
    }

    #[test]
    fn test_landscape_scaling() {
        let mapped = map_view_rect_to_image_space(
            ScreenLayout::Landscape,
            FrameSize::new(100, 200),
            ViewRect::new(10, 20, 50, 80),
            FrameSize::new(200, 400),
        )
        .unwrap();
        assert_eq!(mapped, ViewRect::new(20, 40, 100, 160));
    }

    #[test]
    fn test_portrait_swaps_axes() {
        // Portrait surface 480x640 over a landscape 1280x960 capture:
        // x scales by 960/480 = 2, y by 1280/640 = 2.
        let mapped = map_view_rect_to_image_space(
            ScreenLayout::Portrait,
            FrameSize::new(480, 640),
            ViewRect::new(40, 100, 440, 500),
            FrameSize::new(1280, 960),
        )
        .unwrap();
        assert_eq!(mapped, ViewRect::new(80, 200, 880, 1000));
    }

    #[test]
    fn test_portrait_full_surface_covers_transposed_image() {
        let surface = FrameSize::new(720, 1280);
        let image = FrameSize::new(1920, 1080);
        let mapped = map_view_rect_to_image_space(
            ScreenLayout::Portrait,
            surface,
            ViewRect::from_size(surface),
            image,
        )
        .unwrap();
        assert_eq!(mapped, ViewRect::new(0, 0, 1080, 1920));
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 1 * 2 / 3 = 0, 5 * 2 / 3 = 3
        let mapped = map_view_rect_to_image_space(
            ScreenLayout::Landscape,
            FrameSize::new(3, 3),
            ViewRect::new(1, 1, 5, 5),
            FrameSize::new(2, 2),
        )
        .unwrap();
        assert_eq!(mapped, ViewRect::new(0, 0, 3, 3));

        // Negative edges truncate toward zero as well: -1 * 2 / 3 = 0
        let mapped = map_view_rect_to_image_space(
            ScreenLayout::Landscape,
            FrameSize::new(3, 3),
            ViewRect::new(-1, -4, 0, 0),
            FrameSize::new(2, 2),
        )
        .unwrap();
        assert_eq!(mapped, ViewRect::new(0, -2, 0, 0));
    }

    #[test]
    fn test_rect_outside_surface_is_not_clamped() {
        let mapped = map_view_rect_to_image_space(
            ScreenLayout::Landscape,
            FrameSize::new(100, 100),
            ViewRect::new(-10, -10, 150, 150),
            FrameSize::new(200, 200),
        )
        .unwrap();
        assert_eq!(mapped, ViewRect::new(-20, -20, 300, 300));
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let mapped = map_view_rect_to_image_space(
            ScreenLayout::Landscape,
            FrameSize::new(1, 1),
            ViewRect::new(0, 0, i32::MAX, 1),
            FrameSize::new(u32::MAX, 1),
        )
        .unwrap();
        assert_eq!(mapped.right, i32::MAX);
    }

    #[test]
    fn test_zero_surface_is_invalid() {
        let result = map_view_rect_to_image_space(
            ScreenLayout::Landscape,
            FrameSize::new(0, 100),
            ViewRect::new(0, 0, 10, 10),
            FrameSize::new(100, 100),
        );
        assert_eq!(
            result,
            Err(GeometryError::InvalidDimension {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn test_zero_image_is_invalid() {
        let result = map_view_rect_to_image_space(
            ScreenLayout::Portrait,
            FrameSize::new(100, 100),
            ViewRect::new(0, 0, 10, 10),
            FrameSize::new(100, 0),
        );
        assert!(matches!(
            result,
            Err(GeometryError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_layout_from_surface() {
        assert_eq!(
            ScreenLayout::from_surface(FrameSize::new(1920, 1080)),
            ScreenLayout::Landscape
        );
        assert_eq!(
            ScreenLayout::from_surface(FrameSize::new(1080, 1920)),
            ScreenLayout::Portrait
        );
        assert_eq!(
            ScreenLayout::from_surface(FrameSize::new(500, 500)),
            ScreenLayout::Portrait
        );
    }

    #[test]
    fn test_layout_from_is_landscape() {
        assert!(ScreenLayout::from_is_landscape(true).is_landscape());
        assert!(!ScreenLayout::from_is_landscape(false).is_landscape());
    }

    #[test]
    fn test_rect_dimensions() {
        let rect = ViewRect::new(10, 20, 50, 80);
        assert_eq!(rect.width(), 40);
        assert_eq!(rect.height(), 60);
    }
}
