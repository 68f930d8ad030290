//! WASM bindings for preview and capture orientation.
//!
//! Sensor descriptors can be passed as plain objects:
//!
//! ```typescript
//! const sensor = { facing: 'front', mountAngle: 270 };
//! const angle = display_orientation_for_sensor(sensor, 90);
//! ```

use viewfinder_core::orientation::{
    resolve_capture_orientation, resolve_display_orientation, ContinuousOrientation,
    ExifOrientation,
};
use viewfinder_core::sensor::{SensorDescriptor, SensorFacing};
use wasm_bindgen::prelude::*;

/// Value returned by the capture bindings when the orientation is unknown.
const UNSPECIFIED: i32 = -1;

fn facing(front_facing: bool) -> SensorFacing {
    if front_facing {
        SensorFacing::Front
    } else {
        SensorFacing::Back
    }
}

fn sensor_from_js(sensor: JsValue) -> Result<SensorDescriptor, JsValue> {
    serde_wasm_bindgen::from_value(sensor).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn capture_to_js(rotation: Option<u32>) -> i32 {
    rotation.map_or(UNSPECIFIED, |degrees| degrees as i32)
}

/// Rotation to apply to the camera preview, in `[0, 360)`.
///
/// # Arguments
///
/// * `device_rotation` - Display rotation in degrees (0, 90, 180 or 270)
/// * `mount_angle` - Sensor mount angle in degrees
/// * `front_facing` - True for a front (mirrored) sensor
#[wasm_bindgen]
pub fn display_orientation(device_rotation: i32, mount_angle: i32, front_facing: bool) -> u32 {
    resolve_display_orientation(device_rotation, mount_angle, facing(front_facing))
}

/// Same as [`display_orientation`], taking a `{ facing, mountAngle }` object.
#[wasm_bindgen]
pub fn display_orientation_for_sensor(
    sensor: JsValue,
    device_rotation: i32,
) -> Result<u32, JsValue> {
    Ok(sensor_from_js(sensor)?.display_orientation(device_rotation))
}

/// Rotation to tag on a capture, or -1 to leave it unchanged.
///
/// # Arguments
///
/// * `orientation` - Raw orientation reading in degrees, -1 when unknown
/// * `mount_angle` - Sensor mount angle in degrees
/// * `front_facing` - True for a front sensor
#[wasm_bindgen]
pub fn capture_orientation(orientation: i32, mount_angle: i32, front_facing: bool) -> i32 {
    let reading = ContinuousOrientation::from_raw(orientation);
    capture_to_js(resolve_capture_orientation(
        reading,
        mount_angle,
        facing(front_facing),
    ))
}

/// Same as [`capture_orientation`], taking a `{ facing, mountAngle }` object.
#[wasm_bindgen]
pub fn capture_orientation_for_sensor(sensor: JsValue, orientation: i32) -> Result<i32, JsValue> {
    let reading = ContinuousOrientation::from_raw(orientation);
    Ok(capture_to_js(sensor_from_js(sensor)?.capture_orientation(reading)))
}

/// EXIF orientation tag (1-8) for a capture rotation, or `undefined` when the
/// rotation is not a quarter turn.
#[wasm_bindgen]
pub fn exif_orientation_for_rotation(degrees: u32) -> Option<u16> {
    ExifOrientation::from_rotation(degrees).map(ExifOrientation::tag)
}
