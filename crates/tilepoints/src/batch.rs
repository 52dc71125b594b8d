//! Decoding many independent batches in parallel.

use rayon::prelude::*;

use crate::Result;
use crate::request::{DecodedPoints, PointsRequest, decode};

/// Decode independent requests on the rayon thread pool.
///
/// Each request is moved into exactly one task, so no buffer is shared. The
/// results come back in request order; a failed batch does not affect the
/// others.
#[must_use]
pub fn decode_all(requests: Vec<PointsRequest>) -> Vec<Result<DecodedPoints>> {
    tracing::debug!("Decoding {} point batches in parallel", requests.len());
    requests.into_par_iter().map(decode).collect()
}
