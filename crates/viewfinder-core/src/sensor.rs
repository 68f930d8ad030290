//! Per-sensor configuration supplied by the platform layer.
//!
//! A [`SensorDescriptor`] is queried once per physical camera and never
//! changes. It serializes with camelCase field names so a host can ship it
//! as JSON or as a plain JavaScript object:
//!
//! ```text
//! { "facing": "front", "mountAngle": 270 }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::orientation::{
    resolve_capture_orientation, resolve_display_orientation, ContinuousOrientation,
};

/// Which way a camera sensor faces relative to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorFacing {
    /// Faces the user; its preview is mirrored.
    Front,
    /// Faces away from the user.
    #[default]
    Back,
}

/// Fixed properties of one camera sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorDescriptor {
    /// Direction the sensor faces.
    pub facing: SensorFacing,
    /// Clockwise angle (degrees) between the sensor's readout orientation
    /// and the device's natural orientation.
    pub mount_angle: i32,
}

impl SensorDescriptor {
    pub fn new(facing: SensorFacing, mount_angle: i32) -> Self {
        Self {
            facing,
            mount_angle,
        }
    }

    /// Rotation to apply to the live preview for the given display rotation.
    pub fn display_orientation(&self, device_rotation: i32) -> u32 {
        resolve_display_orientation(device_rotation, self.mount_angle, self.facing)
    }

    /// Rotation to tag on a capture for the given orientation reading.
    ///
    /// `None` means the reading is unknown and the capture rotation should be
    /// left as is.
    pub fn capture_orientation(&self, reading: ContinuousOrientation) -> Option<u32> {
        resolve_capture_orientation(reading, self.mount_angle, self.facing)
    }
}

/// Flash modes a sensor may advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashMode {
    Off,
    Auto,
    On,
    RedEye,
    Torch,
}

impl FlashMode {
    /// Platform name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            FlashMode::Off => "off",
            FlashMode::Auto => "auto",
            FlashMode::On => "on",
            FlashMode::RedEye => "red-eye",
            FlashMode::Torch => "torch",
        }
    }
}

impl fmt::Display for FlashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a flash mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown flash mode: {0}")]
pub struct UnknownFlashMode(pub String);

impl FromStr for FlashMode {
    type Err = UnknownFlashMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(FlashMode::Off),
            "auto" => Ok(FlashMode::Auto),
            "on" => Ok(FlashMode::On),
            "red-eye" => Ok(FlashMode::RedEye),
            "torch" => Ok(FlashMode::Torch),
            other => Err(UnknownFlashMode(other.to_string())),
        }
    }
}

/// Check whether `mode` appears in a sensor's advertised flash modes.
pub fn supports_flash_mode(supported: &[FlashMode], mode: FlashMode) -> bool {
    supported.contains(&mode)
}
