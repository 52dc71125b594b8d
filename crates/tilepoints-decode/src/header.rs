//! Packed header unpacking.

use crate::bytes::f64s_from_le_bytes;
use crate::ellipsoid::Ellipsoid;
use crate::error::{DecodeError, DecodeResult};
use crate::rectangle::Rectangle;

/// Number of `f64` values in a packed header.
pub const PACKED_HEADER_LENGTH: usize = 2 + Rectangle::PACKED_LENGTH + Ellipsoid::PACKED_LENGTH;

/// Bounds shared by every point in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackedHeader {
    pub minimum_height: f64,
    pub maximum_height: f64,
    pub rectangle: Rectangle,
    pub ellipsoid: Ellipsoid,
}

/// Unpack the batch header.
///
/// # Format
///
/// - Values 0-1: Minimum and maximum height in meters
/// - Values 2-5: Rectangle (west, south, east, north) in radians
/// - Values 6-8: Ellipsoid radii (x, y, z)
///
/// Values past the fixed layout are ignored.
pub fn unpack_header(packed: &[f64]) -> DecodeResult<PackedHeader> {
    let Some(&[minimum_height, maximum_height, west, south, east, north, rx, ry, rz]) =
        packed.first_chunk::<PACKED_HEADER_LENGTH>()
    else {
        return Err(DecodeError::header_too_short(
            PACKED_HEADER_LENGTH,
            packed.len(),
        ));
    };

    let rectangle = Rectangle::from_packed([west, south, east, north]);
    let ellipsoid = Ellipsoid::from_packed([rx, ry, rz]);

    tracing::trace!(
        "Unpacked header: rectangle={:?}, radii={}",
        rectangle,
        ellipsoid.radii()
    );

    Ok(PackedHeader {
        minimum_height,
        maximum_height,
        rectangle,
        ellipsoid,
    })
}

/// Unpack a header transported as little-endian `f64` bytes.
pub fn unpack_header_bytes(bytes: &[u8]) -> DecodeResult<PackedHeader> {
    unpack_header(&f64s_from_le_bytes(bytes)?)
}

/// Pack a header into its fixed layout.
#[must_use]
pub fn pack_header(header: &PackedHeader) -> [f64; PACKED_HEADER_LENGTH] {
    let mut packed = [0.0; PACKED_HEADER_LENGTH];
    packed[0] = header.minimum_height;
    packed[1] = header.maximum_height;
    packed[2..6].copy_from_slice(&header.rectangle.to_packed());
    packed[6..].copy_from_slice(&header.ellipsoid.to_packed());
    packed
}
