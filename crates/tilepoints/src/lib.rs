//! Worker-facing entry point for decoding vector tile point batches.
//!
//! A tile worker receives a packed header and a buffer of quantized position
//! codes, decodes them, and hands the Cartesian positions back to whoever
//! scheduled the job. This crate wraps [`tilepoints_decode`] in that shape:
//!
//! - [`PointsRequest`] owns the inputs of one batch, either as typed buffers
//!   or parsed from little-endian transport bytes
//! - [`decode`] consumes a request and moves the output into [`DecodedPoints`]
//!   without copying
//! - `decode_all` (feature `parallel`) decodes independent requests on the
//!   rayon thread pool
//!
//! # Example
//!
//! ```
//! use tilepoints::{PointsRequest, decode};
//! use tilepoints_decode::{Ellipsoid, PackedHeader, Rectangle, pack_header, pack_positions};
//!
//! let header = pack_header(&PackedHeader {
//!     minimum_height: 0.0,
//!     maximum_height: 100.0,
//!     rectangle: Rectangle::new(0.0, 0.0, 0.01, 0.01),
//!     ellipsoid: Ellipsoid::WGS84,
//! });
//! let positions = pack_positions(&[[0, 0, 0], [16_000, 8_000, 300]]).unwrap();
//!
//! let points = decode(PointsRequest::new(header.to_vec(), positions)).unwrap();
//! assert_eq!(points.len(), 2);
//! ```

#[cfg(feature = "parallel")]
mod batch;
mod request;

#[cfg(feature = "parallel")]
pub use batch::decode_all;
pub use request::{DecodedPoints, PointsRequest, decode};

/// Errors returned by this crate.
pub use tilepoints_decode::DecodeError as Error;

pub type Result<T> = std::result::Result<T, Error>;
