//! Clockwise quarter-turn rotation of a single-plane buffer.
//!
//! For a source of `width x height`, each source pixel `(x, y)` lands at
//! destination index `x * height + height - y - 1`. The destination is
//! `height` pixels wide and `width` pixels tall:
//!
//! ```text
//! source 2x3        destination 3x2
//! ┌───┬───┐         ┌───┬───┬───┐
//! │ A │ B │         │ E │ C │ A │
//! ├───┼───┤   ──▶   ├───┼───┼───┤
//! │ C │ D │         │ F │ D │ B │
//! ├───┼───┤         └───┴───┴───┘
//! │ E │ F │
//! └───┴───┘
//! ```

use tracing::debug;

use crate::error::{GeometryError, Result};

/// Rotate a landscape frame a quarter turn clockwise into a new buffer.
///
/// # Arguments
///
/// * `source` - Row-major single-plane pixels
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
///
/// # Returns
///
/// A buffer of the same length laid out `height` pixels wide and `width`
/// pixels tall. The caller tracks the swapped dimensions.
///
/// # Errors
///
/// - `InvalidDimension` if `width` or `height` is zero
/// - `SizeMismatch` if `source.len() != width * height`
pub fn rotate_landscape_to_portrait(source: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let expected = plane_len(width, height)?;
    check_len(width, height, expected, source.len())?;

    let mut rotated = vec![0u8; expected];
    remap(source, width as usize, height as usize, &mut rotated);
    Ok(rotated)
}

/// Rotate a landscape frame a quarter turn clockwise into a caller-owned
/// buffer.
///
/// Same mapping as [`rotate_landscape_to_portrait`], for callers that pool
/// destination buffers across a frame stream.
///
/// # Errors
///
/// As [`rotate_landscape_to_portrait`], plus `SizeMismatch` if
/// `destination.len() != width * height`. Nothing is written on error.
pub fn rotate_landscape_to_portrait_into(
    source: &[u8],
    width: u32,
    height: u32,
    destination: &mut [u8],
) -> Result<()> {
    let expected = plane_len(width, height)?;
    check_len(width, height, expected, source.len())?;
    check_len(height, width, expected, destination.len())?;

    remap(source, width as usize, height as usize, destination);
    Ok(())
}

/// Byte length of a `width x height` plane.
///
/// Zero dimensions and products that overflow `usize` are both
/// `InvalidDimension`.
pub(super) fn plane_len(width: u32, height: u32) -> Result<usize> {
    let invalid = GeometryError::InvalidDimension { width, height };
    if width == 0 || height == 0 {
        debug!(width, height, "Rejecting frame with zero dimension");
        return Err(invalid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(invalid)
}

fn check_len(width: u32, height: u32, expected: usize, actual: usize) -> Result<()> {
    if actual != expected {
        debug!(width, height, expected, actual, "Rejecting frame buffer");
        return Err(GeometryError::SizeMismatch {
            width,
            height,
            expected,
            actual,
        });
    }
    Ok(())
}

/// `destination[x * height + height - y - 1] = source[x + y * width]`
///
/// Lengths are validated by the callers.
fn remap(source: &[u8], width: usize, height: usize, destination: &mut [u8]) {
    for (y, row) in source.chunks_exact(width).enumerate() {
        let column = height - y - 1;
        for (x, &value) in row.iter().enumerate() {
            destination[x * height + column] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u8 = b'A';
    const B: u8 = b'B';
    const C: u8 = b'C';
    const D: u8 = b'D';
    const E: u8 = b'E';
    const F: u8 = b'F';

    #[test]
    fn test_known_layout_2x3() {
        let source = [A, B, C, D, E, F];
        let rotated = rotate_landscape_to_portrait(&source, 2, 3).unwrap();
        assert_eq!(rotated, vec![E, C, A, F, D, B]);
    }

    #[test]
    fn test_known_layout_3x2() {
        // Row 0: A B C, row 1: D E F. Rotated is 2 wide, 3 tall.
        let source = [A, B, C, D, E, F];
        let rotated = rotate_landscape_to_portrait(&source, 3, 2).unwrap();
        assert_eq!(rotated, vec![D, A, E, B, F, C]);
    }

    #[test]
    fn test_single_pixel() {
        let rotated = rotate_landscape_to_portrait(&[42], 1, 1).unwrap();
        assert_eq!(rotated, vec![42]);
    }

    #[test]
    fn test_single_row_becomes_single_column() {
        let source = [1, 2, 3, 4];
        let rotated = rotate_landscape_to_portrait(&source, 4, 1).unwrap();
        assert_eq!(rotated, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_single_column_becomes_reversed_row() {
        let source = [1, 2, 3, 4];
        let rotated = rotate_landscape_to_portrait(&source, 1, 4).unwrap();
        assert_eq!(rotated, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_twice_is_half_turn_not_identity() {
        let source = [A, B, C, D, E, F];
        let once = rotate_landscape_to_portrait(&source, 2, 3).unwrap();
        // Dimensions swap between calls: the first result is 3 wide, 2 tall.
        let twice = rotate_landscape_to_portrait(&once, 3, 2).unwrap();

        assert_ne!(twice, source.to_vec());
        assert_eq!(twice, vec![F, E, D, C, B, A]);
    }

    #[test]
    fn test_four_times_is_identity() {
        let source: Vec<u8> = (0..12).collect();
        let r1 = rotate_landscape_to_portrait(&source, 4, 3).unwrap();
        let r2 = rotate_landscape_to_portrait(&r1, 3, 4).unwrap();
        let r3 = rotate_landscape_to_portrait(&r2, 4, 3).unwrap();
        let r4 = rotate_landscape_to_portrait(&r3, 3, 4).unwrap();
        assert_eq!(r4, source);
    }

    #[test]
    fn test_size_mismatch_short() {
        let result = rotate_landscape_to_portrait(&[0; 5], 2, 3);
        assert_eq!(
            result,
            Err(GeometryError::SizeMismatch {
                width: 2,
                height: 3,
                expected: 6,
                actual: 5,
            })
        );
    }

    #[test]
    fn test_size_mismatch_long() {
        // A full NV21 buffer is not a single plane
        let result = rotate_landscape_to_portrait(&[0; 9], 2, 3);
        assert!(matches!(
            result,
            Err(GeometryError::SizeMismatch {
                expected: 6,
                actual: 9,
                ..
            })
        ));
    }

    #[test]
    fn test_zero_dimension_is_invalid() {
        assert_eq!(
            rotate_landscape_to_portrait(&[], 0, 3),
            Err(GeometryError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            rotate_landscape_to_portrait(&[], 3, 0),
            Err(GeometryError::InvalidDimension {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn test_into_matches_allocating() {
        let source: Vec<u8> = (0..20).collect();
        let mut destination = vec![0u8; 20];
        rotate_landscape_to_portrait_into(&source, 5, 4, &mut destination).unwrap();
        assert_eq!(
            destination,
            rotate_landscape_to_portrait(&source, 5, 4).unwrap()
        );
    }

    #[test]
    fn test_into_reuses_buffer() {
        let mut destination = vec![0xFFu8; 6];
        rotate_landscape_to_portrait_into(&[A, B, C, D, E, F], 2, 3, &mut destination).unwrap();
        assert_eq!(destination, vec![E, C, A, F, D, B]);

        rotate_landscape_to_portrait_into(&[F, E, D, C, B, A], 2, 3, &mut destination).unwrap();
        assert_eq!(destination, vec![B, D, F, A, C, E]);
    }

    #[test]
    fn test_into_rejects_wrong_destination() {
        let mut destination = vec![7u8; 4];
        let result = rotate_landscape_to_portrait_into(&[0; 6], 2, 3, &mut destination);
        assert_eq!(
            result,
            Err(GeometryError::SizeMismatch {
                width: 3,
                height: 2,
                expected: 6,
                actual: 4,
            })
        );
        // Untouched on error
        assert_eq!(destination, vec![7u8; 4]);
    }
}
