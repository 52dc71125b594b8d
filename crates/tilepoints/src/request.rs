//! Single-batch requests and their decoded output.

use glam::DVec3;
use tilepoints_decode::{
    DecodeOptions, decode_points_into, f64s_from_le_bytes, f64s_to_le_bytes, u16s_from_le_bytes,
};

use crate::Result;

/// Inputs for decoding one batch of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsRequest {
    /// Packed header values (heights, rectangle, ellipsoid radii).
    pub packed_header: Vec<f64>,
    /// Zig-zag delta codes laid out as `[x.., y.., z..]`.
    pub positions: Vec<u16>,
    pub options: DecodeOptions,
}

impl PointsRequest {
    #[must_use]
    pub fn new(packed_header: Vec<f64>, positions: Vec<u16>) -> Self {
        Self {
            packed_header,
            positions,
            options: DecodeOptions::default(),
        }
    }

    /// Build a request from little-endian transport buffers.
    ///
    /// The header is a sequence of `f64` values and the positions a sequence of
    /// `u16` codes. Both must be a whole number of elements long.
    pub fn from_le_bytes(packed_header: &[u8], positions: &[u8]) -> Result<Self> {
        Ok(Self::new(
            f64s_from_le_bytes(packed_header)?,
            u16s_from_le_bytes(positions)?,
        ))
    }

    #[must_use]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }
}

/// Decoded Cartesian positions of one batch, point-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedPoints {
    positions: Vec<f64>,
}

impl DecodedPoints {
    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `[x0, y0, z0, x1, ...]` coordinates.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.positions
    }

    /// Take ownership of the flat coordinate buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.positions
    }

    /// Iterate over the points as vectors.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.positions.chunks_exact(3).map(DVec3::from_slice)
    }

    /// Serialize as little-endian `f64` bytes for transport.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        f64s_to_le_bytes(&self.positions)
    }
}

/// Decode one batch.
///
/// The request's position buffer is decoded in place and then dropped; the
/// output buffer is moved into the result.
pub fn decode(request: PointsRequest) -> Result<DecodedPoints> {
    let PointsRequest {
        packed_header,
        mut positions,
        options,
    } = request;

    let mut out = Vec::with_capacity(positions.len());
    let point_count = decode_points_into(&packed_header, &mut positions, options, &mut out)
        .inspect_err(|e| tracing::debug!("Rejected point batch: {}", e))?;

    tracing::debug!("Decoded point batch: {} points", point_count);
    Ok(DecodedPoints { positions: out })
}
