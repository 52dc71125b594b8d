//! Generate deterministic point decoding test vectors.
//!
//! Each vector holds a packed header, the encoded position codes, the absolute
//! codes they decode to and the resulting Cartesian positions. Other decoder
//! implementations can load the JSON files and compare their output.
//!
//! Run: `cargo run -p tilepoints --features test-tools --bin generate_test_vectors -- <output_dir>`

use std::env;
use std::f64::consts::TAU;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tilepoints::{PointsRequest, decode};
use tilepoints_decode::{
    Cartographic, Ellipsoid, PackedHeader, Rectangle, pack_header, pack_positions, quantize,
};

const DEFAULT_OUTPUT_DIR: &str = "test_vectors";

struct VectorSpec {
    name: &'static str,
    header: PackedHeader,
    point_count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let output_dir = args.get(1).map_or(DEFAULT_OUTPUT_DIR, String::as_str);
    let output_path = Path::new(output_dir);
    fs::create_dir_all(output_path)?;

    let specs = [
        VectorSpec {
            name: "empty",
            header: PackedHeader {
                minimum_height: 0.0,
                maximum_height: 0.0,
                rectangle: Rectangle::new(0.0, 0.0, 0.0, 0.0),
                ellipsoid: Ellipsoid::WGS84,
            },
            point_count: 0,
        },
        VectorSpec {
            name: "unit_sphere",
            header: PackedHeader {
                minimum_height: 0.0,
                maximum_height: 1.0,
                rectangle: Rectangle::new(0.0, 0.0, 1.0, 1.0),
                ellipsoid: Ellipsoid::UNIT_SPHERE,
            },
            point_count: 16,
        },
        VectorSpec {
            name: "wgs84_city_block",
            header: PackedHeader {
                minimum_height: -12.0,
                maximum_height: 480.0,
                rectangle: Rectangle::new(
                    2.350_f64.to_radians(),
                    48.850_f64.to_radians(),
                    2.360_f64.to_radians(),
                    48.860_f64.to_radians(),
                ),
                ellipsoid: Ellipsoid::WGS84,
            },
            point_count: 256,
        },
    ];

    println!("Writing test vectors to {}\n", output_path.display());
    for spec in &specs {
        write_vector(output_path, spec)?;
    }

    Ok(())
}

/// Points along a spiral inside the rectangle, so consecutive points are close
/// together like an encoder's space-filling traversal.
#[allow(clippy::cast_precision_loss)]
fn spiral(spec: &VectorSpec) -> Vec<[u16; 3]> {
    let header = &spec.header;
    let rectangle = header.rectangle;
    (0..spec.point_count)
        .map(|i| {
            let t = i as f64 / spec.point_count.max(1) as f64;
            let angle = t * 4.0 * TAU;
            let position = Cartographic::from_radians(
                rectangle.longitude_at(0.5 + 0.5 * t * angle.cos()),
                rectangle.latitude_at(0.5 + 0.5 * t * angle.sin()),
                header.minimum_height + t * (header.maximum_height - header.minimum_height),
            );
            [
                quantize(position.longitude, rectangle.west, rectangle.east),
                quantize(position.latitude, rectangle.south, rectangle.north),
                quantize(position.height, header.minimum_height, header.maximum_height),
            ]
        })
        .collect()
}

fn write_vector(output_path: &Path, spec: &VectorSpec) -> Result<(), Box<dyn std::error::Error>> {
    let codes = spiral(spec);
    let packed_header = pack_header(&spec.header).to_vec();
    let positions = pack_positions(&codes)?;

    let decoded = decode(PointsRequest::new(packed_header.clone(), positions.clone()))?;

    let json = serde_json::json!({
        "name": spec.name,
        "packed_header": packed_header,
        "positions": positions,
        "decoded_codes": codes,
        "decoded_positions": decoded.as_slice(),
    });

    let path = output_path.join(format!("{}.json", spec.name));
    File::create(&path)?.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    println!(
        "  {}: {} points -> {}",
        spec.name,
        decoded.len(),
        path.display()
    );

    Ok(())
}
