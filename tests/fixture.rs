use std::fs;

use ringcut::{deviation, Triangulator};

type Rings = Vec<Vec<[f64; 2]>>;

/// Load a ring-list fixture and flatten it into the coordinate array plus
/// hole start indices (vertex units) that `triangulate` expects.
fn load_fixture(name: &str) -> (Vec<f64>, Vec<u32>) {
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

fn check_fixture(name: &str, num_triangles: usize, max_deviation: f64) {
    let (data, hole_indices) = load_fixture(name);

    let mut tri = Triangulator::new();
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &hole_indices, 2, &mut triangles);

    assert_eq!(triangles.len(), num_triangles * 3);
    let num_verts = (data.len() / 2) as u32;
    assert!(triangles.iter().all(|&i| i < num_verts));
    if !triangles.is_empty() {
        assert!(deviation(&data, &hole_indices, 2, &triangles) <= max_deviation);
    }
}

#[test]
fn fixture_comb() {
    check_fixture("comb", 8, 0.0);
}

#[test]
fn fixture_comb_wide() {
    check_fixture("comb_wide", 16, 0.0);
}

#[test]
fn fixture_ring() {
    check_fixture("ring", 12, 0.0);
}

#[test]
fn fixture_twin_holes() {
    check_fixture("twin_holes", 14, 0.0);
}

// 144 vertices, well past the z-order threshold
#[test]
fn fixture_gear() {
    check_fixture("gear", 142, 1e-12);
}
