//! Rotation angles for preview surfaces and captured frames.
//!
//! Two different rotations are resolved here:
//!
//! - **Display orientation** turns the live preview upright for the current
//!   display rotation. Front sensors are mirrored, so their angle is mirrored
//!   too.
//! - **Capture orientation** is the rotation tagged on a still or video
//!   buffer, derived from a continuous orientation reading. Its
//!   facing-dependent sign is the inverse of the display case.
//!
//! # Angle Conventions
//!
//! - All angles are integer degrees, clockwise
//! - Every result is normalized into `[0, 360)`
//! - Inputs outside the usual ranges are accepted and normalized, but are
//!   logged as contract violations

mod capture;
mod display;
mod exif;

pub use capture::{resolve_capture_orientation, ContinuousOrientation};
pub use display::resolve_display_orientation;
pub use exif::ExifOrientation;

/// Display rotations the platform reports, as a rotation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DisplayRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl DisplayRotation {
    /// Convert a platform rotation index (0..=3) into a rotation.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(DisplayRotation::Rotation0),
            1 => Some(DisplayRotation::Rotation90),
            2 => Some(DisplayRotation::Rotation180),
            3 => Some(DisplayRotation::Rotation270),
            _ => None,
        }
    }

    /// Rotation in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            DisplayRotation::Rotation0 => 0,
            DisplayRotation::Rotation90 => 90,
            DisplayRotation::Rotation180 => 180,
            DisplayRotation::Rotation270 => 270,
        }
    }
}

/// Returns true for the four rotations a display can report.
#[inline]
pub fn is_standard_rotation(degrees: i32) -> bool {
    matches!(degrees, 0 | 90 | 180 | 270)
}

/// Normalize any angle into `[0, 360)`.
///
/// Uses Euclidean remainder, so negative angles wrap the right way
/// (`-90` becomes `270`).
#[inline]
pub fn normalize_degrees(degrees: i64) -> u32 {
    degrees.rem_euclid(360) as u32
}
