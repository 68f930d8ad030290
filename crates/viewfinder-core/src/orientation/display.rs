//! Preview (display) orientation.

use tracing::warn;

use super::{is_standard_rotation, normalize_degrees};
use crate::sensor::SensorFacing;

/// Resolve the rotation to apply to a camera preview.
///
/// # Arguments
///
/// * `device_rotation` - Current display rotation in degrees (0, 90, 180 or 270)
/// * `mount_angle` - Sensor mount angle in degrees
/// * `facing` - Which way the sensor faces
///
/// # Returns
///
/// Clockwise preview rotation in `[0, 360)`.
///
/// # Behavior
///
/// - Back: `(mount_angle - device_rotation) mod 360`
/// - Front: `(mount_angle + device_rotation) mod 360`, then mirrored as
///   `(360 - angle) mod 360` to undo the preview mirror flip
///
/// A device rotation outside {0, 90, 180, 270} is still normalized but is
/// logged as a warning.
pub fn resolve_display_orientation(
    device_rotation: i32,
    mount_angle: i32,
    facing: SensorFacing,
) -> u32 {
    if !is_standard_rotation(device_rotation) {
        warn!(device_rotation, "Display rotation is not one of 0/90/180/270");
    }
    if mount_angle % 90 != 0 {
        warn!(mount_angle, "Sensor mount angle is not a multiple of 90");
    }

    let rotation = i64::from(device_rotation);
    let mount = i64::from(mount_angle);

    match facing {
        SensorFacing::Front => {
            let angle = normalize_degrees(mount + rotation);
            normalize_degrees(360 - i64::from(angle))
        }
        SensorFacing::Back => normalize_degrees(mount - rotation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_identity() {
        assert_eq!(resolve_display_orientation(0, 90, SensorFacing::Back), 90);
        assert_eq!(resolve_display_orientation(90, 90, SensorFacing::Back), 0);
    }

    #[test]
    fn test_back_wraps_negative() {
        // 90 - 180 = -90 -> 270
        assert_eq!(resolve_display_orientation(180, 90, SensorFacing::Back), 270);
        assert_eq!(resolve_display_orientation(270, 90, SensorFacing::Back), 180);
    }

    #[test]
    fn test_front_mirror() {
        // 270 + 0 = 270, mirrored -> 90
        assert_eq!(resolve_display_orientation(0, 270, SensorFacing::Front), 90);
        // 270 + 90 = 360 -> 0, mirrored -> 0
        assert_eq!(resolve_display_orientation(90, 270, SensorFacing::Front), 0);
        // 270 + 180 = 450 -> 90, mirrored -> 270
        assert_eq!(
            resolve_display_orientation(180, 270, SensorFacing::Front),
            270
        );
    }

    #[test]
    fn test_zero_mount_zero_rotation() {
        assert_eq!(resolve_display_orientation(0, 0, SensorFacing::Back), 0);
        assert_eq!(resolve_display_orientation(0, 0, SensorFacing::Front), 0);
    }

    #[test]
    fn test_nonstandard_rotation_is_normalized() {
        // 360 behaves like 0
        assert_eq!(resolve_display_orientation(360, 90, SensorFacing::Back), 90);
        // Negative rotation behaves like its positive equivalent
        assert_eq!(
            resolve_display_orientation(-90, 90, SensorFacing::Back),
            resolve_display_orientation(270, 90, SensorFacing::Back)
        );
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let angle = resolve_display_orientation(i32::MIN, i32::MAX, SensorFacing::Back);
        assert!(angle < 360);
        let angle = resolve_display_orientation(i32::MAX, i32::MAX, SensorFacing::Front);
        assert!(angle < 360);
    }
}
