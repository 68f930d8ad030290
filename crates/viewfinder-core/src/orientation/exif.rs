//! EXIF orientation tags for resolved capture rotations.
//!
//! A still encoder records the capture rotation as the EXIF Orientation tag
//! (0x0112). See: https://exiftool.org/TagNames/EXIF.html

use serde::{Deserialize, Serialize};

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExifOrientation {
    /// Stored upright.
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    /// Display after rotating 180 degrees.
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal, then rotate 270 degrees clockwise.
    Transpose = 5,
    /// Display after rotating 90 degrees clockwise.
    Rotate90CW = 6,
    /// Flip horizontal, then rotate 90 degrees clockwise.
    Transverse = 7,
    /// Display after rotating 270 degrees clockwise.
    Rotate270CW = 8,
}

impl ExifOrientation {
    /// Tag for a clockwise capture rotation.
    ///
    /// Only quarter turns have a tag; anything else returns `None`.
    pub fn from_rotation(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(ExifOrientation::Normal),
            90 => Some(ExifOrientation::Rotate90CW),
            180 => Some(ExifOrientation::Rotate180),
            270 => Some(ExifOrientation::Rotate270CW),
            _ => None,
        }
    }

    /// Parse a raw tag value. Values outside 1-8 are rejected.
    pub fn from_tag(value: u16) -> Option<Self> {
        match value {
            1 => Some(ExifOrientation::Normal),
            2 => Some(ExifOrientation::FlipHorizontal),
            3 => Some(ExifOrientation::Rotate180),
            4 => Some(ExifOrientation::FlipVertical),
            5 => Some(ExifOrientation::Transpose),
            6 => Some(ExifOrientation::Rotate90CW),
            7 => Some(ExifOrientation::Transverse),
            8 => Some(ExifOrientation::Rotate270CW),
            _ => None,
        }
    }

    /// Raw tag value.
    pub fn tag(self) -> u16 {
        self as u16
    }

    /// Clockwise rotation applied after any flip.
    pub fn rotation_degrees(self) -> u32 {
        match self {
            ExifOrientation::Normal | ExifOrientation::FlipHorizontal => 0,
            ExifOrientation::Rotate180 | ExifOrientation::FlipVertical => 180,
            ExifOrientation::Rotate90CW | ExifOrientation::Transverse => 90,
            ExifOrientation::Rotate270CW | ExifOrientation::Transpose => 270,
        }
    }

    /// True when the tag includes a mirror flip.
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            ExifOrientation::FlipHorizontal
                | ExifOrientation::FlipVertical
                | ExifOrientation::Transpose
                | ExifOrientation::Transverse
        )
    }

    /// True when displaying the image swaps its width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        self.rotation_degrees() % 180 == 90
    }
}
