//! Decode quantized point positions from streamed vector tiles.
//!
//! Point batches arrive as a small packed header (height bounds, a geodetic
//! rectangle and an ellipsoid) plus a buffer of 16-bit codes. The codes are
//! laid out as structure-of-arrays (all X, then all Y, then all Z) and each
//! axis is zig-zag delta encoded. Decoding inverts the deltas, dequantizes the
//! codes against the header bounds and projects the resulting geodetic
//! coordinates onto the ellipsoid.
//!
//! # Design principles
//!
//! - **Stateless**: every call owns its header, codes and output
//! - **Synchronous**: No async, no threading primitives
//! - **User-controlled parallelism**: independent batches share nothing, so
//!   callers can decode them on any number of threads
//!
//! # Key functions
//!
//! - [`decode_points`]: Full pipeline, header + codes to Cartesian positions
//! - [`unpack_header`]: Parse the packed header
//! - [`unpack_positions`]: Invert the zig-zag delta coding in place
//! - [`project_points`]: Dequantize codes and project them onto the ellipsoid
//! - [`pack_header`] / [`pack_positions`]: The encoder side of the format

mod bytes;
mod error;

pub mod ellipsoid;
pub mod header;
pub mod rectangle;
pub mod transform;
pub mod zigzag;

use std::fmt;

pub use bytes::{f64s_from_le_bytes, f64s_to_le_bytes, u16s_from_le_bytes, u16s_to_le_bytes};
pub use ellipsoid::{Cartographic, Ellipsoid};
pub use error::{DecodeError, DecodeResult, MalformedInput};
pub use header::{PACKED_HEADER_LENGTH, PackedHeader, pack_header, unpack_header, unpack_header_bytes};
pub use rectangle::Rectangle;
pub use transform::{dequantize, lerp, project_points, quantize};
pub use zigzag::{pack_positions, unpack_positions, zigzag_decode, zigzag_encode};

/// Largest quantized code (15-bit resolution).
///
/// This is a wire-format constant shared with the encoder.
pub const MAX_QUANTIZED: u16 = 32767;

/// One of the three position axes.
///
/// X carries longitude, Y latitude and Z height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in buffer order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// How the delta decoder treats running sums outside `[0, MAX_QUANTIZED]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeCheck {
    /// Reject the batch with [`MalformedInput::QuantizedOutOfRange`].
    #[default]
    Strict,
    /// Store the running sum truncated to 16 bits, matching encoders that
    /// never validated their output.
    Wrapping,
}

/// Options for a decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub range_check: RangeCheck,
}

impl DecodeOptions {
    /// Options that reproduce unchecked 16-bit wrap-around.
    #[must_use]
    pub fn wrapping() -> Self {
        Self {
            range_check: RangeCheck::Wrapping,
        }
    }
}

/// Decode a batch of points with default options.
///
/// # Arguments
///
/// * `packed_header` - Header values, see [`unpack_header`]
/// * `positions` - `3N` zig-zag delta codes; decoded to absolute codes in place
///
/// # Returns
///
/// `3N` Cartesian coordinates in point-major order.
pub fn decode_points(packed_header: &[f64], positions: &mut [u16]) -> DecodeResult<Vec<f64>> {
    decode_points_with(packed_header, positions, DecodeOptions::default())
}

/// Decode a batch of points.
///
/// On error the contents of `positions` are unspecified and no output is
/// produced.
pub fn decode_points_with(
    packed_header: &[f64],
    positions: &mut [u16],
    options: DecodeOptions,
) -> DecodeResult<Vec<f64>> {
    let mut out = Vec::new();
    decode_points_into(packed_header, positions, options, &mut out)?;
    Ok(out)
}

/// Decode a batch of points, appending the coordinates to `out`.
///
/// `out` is left untouched when decoding fails. Returns the number of points
/// appended.
pub fn decode_points_into(
    packed_header: &[f64],
    positions: &mut [u16],
    options: DecodeOptions,
    out: &mut Vec<f64>,
) -> DecodeResult<usize> {
    let header = unpack_header(packed_header)?;
    let point_count = unpack_positions(positions, options)?;
    let [x, y, z] = zigzag::split_axes(positions)?;

    project_points(&header, x, y, z, out);

    tracing::debug!(
        "Decoded {} points (heights {}..{})",
        point_count,
        header.minimum_height,
        header.maximum_height
    );
    Ok(point_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn header(rectangle: Rectangle, ellipsoid: Ellipsoid) -> Vec<f64> {
        pack_header(&PackedHeader {
            minimum_height: 0.0,
            maximum_height: 100.0,
            rectangle,
            ellipsoid,
        })
        .to_vec()
    }

    #[test]
    fn empty_batch_decodes_to_empty_output() {
        let packed = header(Rectangle::new(0.0, 0.0, 1.0, 1.0), Ellipsoid::WGS84);
        let out = decode_points(&packed, &mut []).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn rejects_positions_not_divisible_by_three() {
        let packed = header(Rectangle::new(0.0, 0.0, 1.0, 1.0), Ellipsoid::WGS84);
        let mut positions = [0_u16; 4];
        let mut out = vec![1.0];

        let err = decode_points_into(&packed, &mut positions, DecodeOptions::default(), &mut out)
            .unwrap_err();

        assert_eq!(
            err,
            DecodeError::MalformedInput(MalformedInput::PositionsNotDivisible { len: 4 })
        );
        assert_eq!(out, vec![1.0]);
    }

    #[test]
    fn rejects_short_header() {
        let err = decode_points(&[0.0; 8], &mut [0, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedInput(MalformedInput::HeaderTooShort {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn zero_codes_land_on_south_west_corner() {
        let radius = 1000.0;
        let packed = pack_header(&PackedHeader {
            minimum_height: 0.0,
            maximum_height: 50.0,
            rectangle: Rectangle::new(0.0, 0.0, 0.5, 0.5),
            ellipsoid: Ellipsoid::sphere(radius),
        });
        let mut positions = [0_u16, 0, 0];

        let out = decode_points(&packed, &mut positions).unwrap();

        assert_eq!(positions, [0, 0, 0]);
        let point = DVec3::from_slice(&out);
        assert!(point.abs_diff_eq(DVec3::new(radius, 0.0, 0.0), 1e-9));
    }

    #[test]
    fn two_point_batch_accumulates_longitude_codes() {
        let packed = pack_header(&PackedHeader {
            minimum_height: 0.0,
            maximum_height: 0.0,
            rectangle: Rectangle::new(0.0, 0.0, 1.0, 1.0),
            ellipsoid: Ellipsoid::UNIT_SPHERE,
        });
        // x codes [4, 2], y and z all zero.
        let mut positions = [4_u16, 2, 0, 0, 0, 0];

        let out = decode_points(&packed, &mut positions).unwrap();

        let first = zigzag_decode(4);
        let second = first + zigzag_decode(2);
        assert_eq!(&positions[..2], &[2, 3]);
        assert_eq!(i32::from(positions[0]), first);
        assert_eq!(i32::from(positions[1]), second);

        for (point, code) in out.chunks_exact(3).zip([first, second]) {
            let longitude = f64::from(code) / f64::from(MAX_QUANTIZED);
            let expected = DVec3::new(longitude.cos(), longitude.sin(), 0.0);
            assert!(DVec3::from_slice(point).abs_diff_eq(expected, 1e-12));
        }
    }

    #[test]
    fn wrapping_option_accepts_overflowing_sums() {
        let packed = header(Rectangle::new(0.0, 0.0, 1.0, 1.0), Ellipsoid::WGS84);
        // A single negative delta underflows the first x code.
        let mut positions = [1_u16, 0, 0];

        assert!(decode_points(&packed, &mut positions.clone()).is_err());

        let out = decode_points_with(&packed, &mut positions, DecodeOptions::wrapping()).unwrap();
        assert_eq!(positions, [u16::MAX, 0, 0]);
        assert_eq!(out.len(), 3);
    }
}
