use ringcut::{deviation, signed_area, Triangulator};

#[test]
fn empty_input() {
    let mut tri = Triangulator::new();
    let data: [f64; 0] = [];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles.len(), 0);
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

#[test]
fn single_point() {
    let mut tri = Triangulator::new();
    let data = [100.0, 200.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles.len(), 0);
}

#[test]
fn two_points() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 200.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles.len(), 0);
}

#[test]
fn triangle() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![1, 2, 0]);
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

#[test]
fn square() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

// the convex quad from the Earcut readme, with its canonical output
#[test]
fn convex_quad() {
    let mut tri = Triangulator::new();
    let data = [10.0, 0.0, 0.0, 50.0, 60.0, 60.0, 70.0, 10.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![1, 0, 3, 3, 2, 1]);
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

// a constant third component must not change the result
#[test]
fn convex_quad_3d() {
    let mut tri = Triangulator::new();
    let data = [
        10.0, 0.0, 0.0, //
        0.0, 50.0, 0.0, //
        60.0, 60.0, 0.0, //
        70.0, 10.0, 0.0, //
    ];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 3, &mut triangles);
    assert_eq!(triangles, vec![1, 0, 3, 3, 2, 1]);
    assert_eq!(deviation(&data, &[], 3, &triangles), 0.0);
}

// reversing the winding covers the identical area
#[test]
fn winding_invariance() {
    let forward = [10.0, 0.0, 0.0, 50.0, 60.0, 60.0, 70.0, 10.0];
    let reversed = [70.0, 10.0, 60.0, 60.0, 0.0, 50.0, 10.0, 0.0];

    let mut tri = Triangulator::new();
    let mut fwd: Vec<u32> = vec![];
    tri.triangulate(&forward, &[], 2, &mut fwd);
    let mut rev: Vec<u32> = vec![];
    tri.triangulate(&reversed, &[], 2, &mut rev);

    assert_eq!(fwd.len(), 6);
    assert_eq!(rev.len(), 6);
    assert_eq!(deviation(&forward, &[], 2, &fwd), 0.0);
    assert_eq!(deviation(&reversed, &[], 2, &rev), 0.0);
}

#[test]
fn square_u16_indices() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let mut triangles: Vec<u16> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn square_usize_indices() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let mut triangles: Vec<usize> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn square_f32() {
    let mut tri = Triangulator::new();
    let data: [f32; 8] = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

// hole range that contains no vertices; the outer triangle still comes out
#[test]
fn empty_hole_range() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[3u32], 2, &mut triangles);
    assert_eq!(triangles.len(), 3);
    assert_eq!(deviation(&data, &[3u32], 2, &triangles), 0.0);
}

// a one-vertex hole is a steiner point: it subdivides but removes no area
#[test]
fn steiner_point_hole() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 50.0, 30.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[3u32], 2, &mut triangles);
    assert_eq!(triangles.len(), 3 * 3);
    assert_eq!(deviation(&data, &[3u32], 2, &triangles), 0.0);
}

#[test]
fn steiner_segment_hole() {
    let mut tri = Triangulator::new();
    let data = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 50.0, 30.0, 60.0, 30.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[3u32], 2, &mut triangles);
    assert_eq!(triangles.len(), 5 * 3);
    assert_eq!(deviation(&data, &[3u32], 2, &triangles), 0.0);
}

#[test]
fn square_with_square_hole() {
    let mut tri = Triangulator::new();
    let data = [
        0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0, // outer
        10.0, 10.0, 90.0, 10.0, 90.0, 90.0, 10.0, 90.0, // hole
    ];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[4u32], 2, &mut triangles);
    assert_eq!(triangles.len(), 8 * 3);
    assert!(triangles.iter().all(|&i| i < 8));
    assert_eq!(deviation(&data, &[4u32], 2, &triangles), 0.0);
}

// hole-free simple polygon: exactly n - 2 triangles
#[test]
fn concave_triangle_count() {
    let mut tri = Triangulator::new();
    let data = [
        0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 3.0, 4.0, 3.0, 1.0, //
        2.0, 1.0, 2.0, 4.0, 1.0, 4.0, 1.0, 1.0, 0.0, 1.0,
    ];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert_eq!(triangles.len(), (10 - 2) * 3);
    assert!(triangles.iter().all(|&i| i < 10));
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

// duplicate and collinear vertices get pruned between passes; the area
// still comes out whole
#[test]
fn duplicate_and_collinear_vertices() {
    let mut tri = Triangulator::new();
    let data = [
        0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 5.0, 10.0, 5.0, 10.0, 0.0, 10.0,
    ];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[], 2, &mut triangles);
    assert!(!triangles.is_empty());
    assert_eq!(triangles.len() % 3, 0);
    assert!(triangles.iter().all(|&i| i < 6));
    assert_eq!(deviation(&data, &[], 2, &triangles), 0.0);
}

// near-degenerate self-touching input: must terminate and stay well-formed,
// whatever subset of the area survives
#[test]
fn pathological_terminates() {
    let mut tri = Triangulator::new();
    let data = [
        0.0, 0.0, 2.0, 0.0, 4.0, 1e-9, 6.0, 0.0, // nearly collinear outer
        2.0, 0.0, 4.0, 1e-9, 6.0, 0.0, // hole touching the outer ring
    ];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&data, &[4u32], 2, &mut triangles);
    assert_eq!(triangles.len() % 3, 0);
    assert!(triangles.iter().all(|&i| i < 7));
}

#[test]
fn reuse_instance() {
    let mut tri = Triangulator::new();
    let quad = [10.0, 0.0, 0.0, 50.0, 60.0, 60.0, 70.0, 10.0];
    let square = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let mut triangles: Vec<u32> = vec![];
    tri.triangulate(&quad, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![1, 0, 3, 3, 2, 1]);
    tri.triangulate(&square, &[], 2, &mut triangles);
    assert_eq!(triangles, vec![2, 3, 0, 0, 1, 2]);
}

#[test]
fn signed_area_winding() {
    let ccw = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
    let cw = [0.0, 100.0, 100.0, 100.0, 100.0, 0.0, 0.0, 0.0];
    assert_eq!(signed_area(&ccw, 0, 4, 2), 20000.0);
    assert_eq!(signed_area(&cw, 0, 4, 2), -20000.0);
}

#[test]
fn signed_area_subrange_and_dim() {
    let data = [
        0.0, 0.0, 9.0, // unrelated leading vertex
        0.0, 0.0, 9.0, //
        2.0, 0.0, 9.0, //
        2.0, 2.0, 9.0, //
        0.0, 2.0, 9.0,
    ];
    assert_eq!(signed_area(&data, 1, 5, 3), 8.0);
    assert_eq!(signed_area(&data, 1, 1, 3), 0.0);
}
