//! Triangulates the bundled fixtures and prints the area deviation of
//! each result. Run with `cargo run --example area_check`.

use std::fs;

use ringcut::{deviation, Triangulator};

fn load_fixture(name: &str) -> (Vec<f64>, Vec<u32>) {
    type Rings = Vec<Vec<[f64; 2]>>;
    let s = fs::read_to_string(format!("./tests/fixtures/{name}.json")).unwrap();
    let rings: Rings = serde_json::from_str(&s).unwrap();

    let num_rings = rings.len();
    let data: Vec<f64> = rings.iter().flatten().flatten().copied().collect();
    let hole_indices: Vec<u32> = rings
        .iter()
        .map(|ring| ring.len() as u32)
        .scan(0, |sum, len| {
            *sum += len;
            Some(*sum)
        })
        .take(num_rings - 1)
        .collect();

    (data, hole_indices)
}

fn main() {
    let mut tri = Triangulator::new();
    let mut triangles: Vec<u32> = Vec::new();

    for name in ["comb", "comb_wide", "ring", "twin_holes", "gear"] {
        let (data, hole_indices) = load_fixture(name);
        tri.triangulate(&data, &hole_indices, 2, &mut triangles);
        println!(
            "{name}: {} vertices, {} triangles, deviation {:e}",
            data.len() / 2,
            triangles.len() / 3,
            deviation(&data, &hole_indices, 2, &triangles)
        );
    }
}
