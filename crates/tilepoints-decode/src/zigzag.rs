//! Zig-zag delta coding of quantized position axes.

use crate::error::{DecodeError, DecodeResult};
use crate::{Axis, DecodeOptions, MAX_QUANTIZED, RangeCheck};

/// Map a zig-zag code back to its signed value.
///
/// Even codes are non-negative (`0, 2, 4` -> `0, 1, 2`), odd codes negative
/// (`1, 3, 5` -> `-1, -2, -3`).
#[must_use]
pub fn zigzag_decode(code: u16) -> i32 {
    let code = i32::from(code);
    (code >> 1) ^ -(code & 1)
}

/// Map a signed delta to its zig-zag code.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn zigzag_encode(delta: i16) -> u16 {
    ((delta << 1) ^ (delta >> 15)) as u16
}

/// Split a position buffer into its X, Y and Z axis arrays.
pub fn split_axes(positions: &[u16]) -> DecodeResult<[&[u16]; 3]> {
    let n = point_count(positions.len())?;
    let (x, rest) = positions.split_at(n);
    let (y, z) = rest.split_at(n);
    Ok([x, y, z])
}

fn split_axes_mut(positions: &mut [u16]) -> DecodeResult<[&mut [u16]; 3]> {
    let n = point_count(positions.len())?;
    let (x, rest) = positions.split_at_mut(n);
    let (y, z) = rest.split_at_mut(n);
    Ok([x, y, z])
}

fn point_count(len: usize) -> DecodeResult<usize> {
    if len % 3 != 0 {
        return Err(DecodeError::positions_not_divisible(len));
    }
    Ok(len / 3)
}

/// Unpack zig-zag delta-encoded positions in place.
///
/// Input format: 3*N codes arranged as [X0..Xn, Y0..Yn, Z0..Zn]. Each axis is
/// a running sum of zig-zag deltas starting from zero.
///
/// Output: the same buffer holding absolute quantized codes.
///
/// # Returns
///
/// The number of points N.
pub fn unpack_positions(positions: &mut [u16], options: DecodeOptions) -> DecodeResult<usize> {
    let axes = split_axes_mut(positions)?;
    let n = axes[0].len();

    for (axis, codes) in Axis::ALL.into_iter().zip(axes) {
        unpack_axis(codes, axis, options.range_check)?;
    }

    Ok(n)
}

/// Unpack one axis of zig-zag deltas in place.
pub fn unpack_axis(codes: &mut [u16], axis: Axis, range_check: RangeCheck) -> DecodeResult<()> {
    let mut value = 0_i32;
    let mut wrapped = 0_usize;

    for (index, code) in codes.iter_mut().enumerate() {
        value = value.wrapping_add(zigzag_decode(*code));
        if !(0..=i32::from(MAX_QUANTIZED)).contains(&value) {
            if range_check == RangeCheck::Strict {
                return Err(DecodeError::quantized_out_of_range(axis, index, value));
            }
            wrapped += 1;
        }
        *code = truncate(value);
    }

    if wrapped > 0 {
        tracing::warn!(
            "Truncated {} out-of-range {} codes to 16 bits",
            wrapped,
            axis
        );
    }
    Ok(())
}

/// Keep the low 16 bits of a running sum.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: i32) -> u16 {
    value as u16
}

/// Pack absolute quantized points into zig-zag delta-encoded axis arrays.
///
/// This is the inverse of [`unpack_positions`]. Every code must be in
/// `[0, MAX_QUANTIZED]`.
pub fn pack_positions(points: &[[u16; 3]]) -> DecodeResult<Vec<u16>> {
    let n = points.len();
    let mut packed = vec![0_u16; 3 * n];

    for (axis_index, axis) in Axis::ALL.into_iter().enumerate() {
        let mut previous = 0_i16;
        for (index, point) in points.iter().enumerate() {
            let code = point[axis_index];
            let value = i16::try_from(code)
                .map_err(|_| DecodeError::quantized_out_of_range(axis, index, code.into()))?;
            packed[axis_index * n + index] = zigzag_encode(value - previous);
            previous = value;
        }
    }

    Ok(packed)
}
