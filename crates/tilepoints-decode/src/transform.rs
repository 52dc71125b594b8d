//! Dequantization and projection onto the ellipsoid.

use crate::MAX_QUANTIZED;
use crate::ellipsoid::Cartographic;
use crate::header::PackedHeader;

/// Linear interpolation written so that `t = 0` yields exactly `a` and
/// `t = 1` yields exactly `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Map a quantized code back to a value in `[min, max]`.
///
/// The code is not clamped; codes above [`MAX_QUANTIZED`] extrapolate past
/// `max`.
#[must_use]
pub fn dequantize(code: u16, min: f64, max: f64) -> f64 {
    lerp(min, max, fraction(code))
}

/// Position of a code within the quantized range, `0` to `1` for valid codes.
fn fraction(code: u16) -> f64 {
    f64::from(code) / f64::from(MAX_QUANTIZED)
}

/// Map a value in `[min, max]` to the nearest quantized code.
///
/// Values outside the range clamp to the nearest end. A degenerate range maps
/// everything to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(value: f64, min: f64, max: f64) -> u16 {
    let range = max - min;
    if range <= 0.0 || !value.is_finite() {
        return 0;
    }
    let t = ((value - min) / range).clamp(0.0, 1.0);
    (t * f64::from(MAX_QUANTIZED)).round() as u16
}

/// Dequantize one point's absolute codes into a geodetic position.
#[must_use]
pub fn dequantize_point(header: &PackedHeader, [x, y, z]: [u16; 3]) -> Cartographic {
    Cartographic::from_radians(
        header.rectangle.longitude_at(fraction(x)),
        header.rectangle.latitude_at(fraction(y)),
        dequantize(z, header.minimum_height, header.maximum_height),
    )
}

/// Dequantize decoded axis codes and project them to Cartesian coordinates.
///
/// # Arguments
///
/// * `header` - Bounds and ellipsoid shared by the batch
/// * `x`, `y`, `z` - Absolute quantized codes, one per point
/// * `out` - Receives `x, y, z` per point in point-major order
pub fn project_points(header: &PackedHeader, x: &[u16], y: &[u16], z: &[u16], out: &mut Vec<f64>) {
    debug_assert!(x.len() == y.len() && y.len() == z.len());
    out.reserve(3 * x.len());

    for ((&u, &v), &h) in x.iter().zip(y).zip(z) {
        let cartographic = dequantize_point(header, [u, v, h]);
        let position = header.ellipsoid.cartographic_to_cartesian(cartographic);
        out.extend_from_slice(&position.to_array());
    }

    tracing::trace!("Projected {} points", x.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ellipsoid, Rectangle};
    use glam::DVec3;

    fn header() -> PackedHeader {
        PackedHeader {
            minimum_height: -35.7,
            maximum_height: 1234.56,
            rectangle: Rectangle::new(-1.3, 0.41, 0.77, 0.93),
            ellipsoid: Ellipsoid::WGS84,
        }
    }

    #[test]
    fn zero_code_is_exactly_the_lower_bound() {
        let point = dequantize_point(&header(), [0, 0, 0]);
        assert_eq!(point.longitude, -1.3);
        assert_eq!(point.latitude, 0.41);
        assert_eq!(point.height, -35.7);
    }

    #[test]
    fn max_code_is_exactly_the_upper_bound() {
        let max = MAX_QUANTIZED;
        let point = dequantize_point(&header(), [max, max, max]);
        assert_eq!(point.longitude, 0.77);
        assert_eq!(point.latitude, 0.93);
        assert_eq!(point.height, 1234.56);
    }

    #[test]
    fn dequantizes_each_axis_against_its_own_bounds() {
        let header = header();
        let point = dequantize_point(&header, [MAX_QUANTIZED, 0, MAX_QUANTIZED]);
        assert_eq!(point.longitude, header.rectangle.east);
        assert_eq!(point.latitude, header.rectangle.south);
        assert_eq!(point.height, header.maximum_height);

        let mid = dequantize_point(&header, [16_384, 16_384, 0]);
        assert_eq!(mid.longitude, header.rectangle.longitude_at(16_384.0 / 32_767.0));
        assert_eq!(mid.latitude, header.rectangle.latitude_at(16_384.0 / 32_767.0));
        assert!(mid.longitude > -0.27 && mid.longitude < -0.26);
    }

    #[test]
    fn quantize_inverts_dequantize() {
        for code in [0, 1, 100, 16_384, 32_766, MAX_QUANTIZED] {
            let value = dequantize(code, -35.7, 1234.56);
            assert_eq!(quantize(value, -35.7, 1234.56), code);
        }
        assert_eq!(quantize(5000.0, 0.0, 100.0), MAX_QUANTIZED);
        assert_eq!(quantize(-1.0, 0.0, 100.0), 0);
        assert_eq!(quantize(3.0, 7.0, 7.0), 0);
    }

    #[test]
    fn projects_in_point_major_order() {
        let header = PackedHeader {
            minimum_height: 0.0,
            maximum_height: 10.0,
            rectangle: Rectangle::new(0.0, 0.0, std::f64::consts::FRAC_PI_2, 0.0),
            ellipsoid: Ellipsoid::sphere(2.0),
        };
        let mut out = Vec::new();

        project_points(
            &header,
            &[0, MAX_QUANTIZED],
            &[0, 0],
            &[0, MAX_QUANTIZED],
            &mut out,
        );

        assert_eq!(out.len(), 6);
        assert!(DVec3::from_slice(&out[..3]).abs_diff_eq(DVec3::new(2.0, 0.0, 0.0), 1e-12));
        assert!(DVec3::from_slice(&out[3..]).abs_diff_eq(DVec3::new(0.0, 12.0, 0.0), 1e-12));
    }

    #[test]
    fn appends_to_existing_output() {
        let mut out = vec![7.0];
        project_points(&header(), &[1], &[2], &[3], &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], 7.0);
    }
}
