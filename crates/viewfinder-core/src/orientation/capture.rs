//! Capture orientation from continuous orientation readings.

use tracing::{debug, warn};

use super::normalize_degrees;
use crate::sensor::SensorFacing;

/// A live reading from the device's orientation sensor.
///
/// Readings arrive at arbitrary rates and arbitrary angles; they are
/// quantized to the nearest quarter turn before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuousOrientation {
    /// The device is flat or the sensor has no reading.
    Unknown,
    /// Clockwise device rotation in degrees, nominally `[0, 360)`.
    Degrees(i32),
}

impl ContinuousOrientation {
    /// Platform sentinel for an unknown reading.
    pub const UNKNOWN_RAW: i32 = -1;

    /// Convert a raw platform reading. Any negative value is unknown.
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            ContinuousOrientation::Unknown
        } else {
            ContinuousOrientation::Degrees(raw)
        }
    }

    /// Round the reading to the nearest multiple of 90, in `[0, 360)`.
    ///
    /// Halfway readings round up: 45 becomes 90 and 315 becomes 0.
    pub fn quantized(self) -> Option<u32> {
        match self {
            ContinuousOrientation::Unknown => None,
            ContinuousOrientation::Degrees(degrees) => {
                let quarter_turns = (i64::from(degrees) + 45).div_euclid(90);
                Some(normalize_degrees(quarter_turns * 90))
            }
        }
    }
}

impl From<i32> for ContinuousOrientation {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

/// Resolve the rotation to tag on a captured buffer.
///
/// # Arguments
///
/// * `reading` - Continuous orientation reading
/// * `mount_angle` - Sensor mount angle in degrees
/// * `facing` - Which way the sensor faces
///
/// # Returns
///
/// `None` when the reading is unknown; the caller should leave the capture
/// rotation unchanged rather than assume 0. Otherwise, with `q` the quantized
/// reading:
///
/// - Front: `(mount_angle - q) mod 360`
/// - Back: `(mount_angle + q) mod 360`
pub fn resolve_capture_orientation(
    reading: ContinuousOrientation,
    mount_angle: i32,
    facing: SensorFacing,
) -> Option<u32> {
    let Some(quantized) = reading.quantized() else {
        debug!("Orientation reading unknown, leaving capture rotation unspecified");
        return None;
    };
    if mount_angle % 90 != 0 {
        warn!(mount_angle, "Sensor mount angle is not a multiple of 90");
    }

    let mount = i64::from(mount_angle);
    let q = i64::from(quantized);

    let rotation = match facing {
        SensorFacing::Front => normalize_degrees(mount - q),
        SensorFacing::Back => normalize_degrees(mount + q),
    };
    Some(rotation)
}
