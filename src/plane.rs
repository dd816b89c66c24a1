//! Projection of planar polygons embedded in 3-D down to flat 2-D
//! coordinates, for feeding [`crate::Triangulator::triangulate`] with
//! `dim = 2`. The polygon's plane is taken from the outer ring's Newell
//! normal; holes are assumed to lie in the same plane.

use alloc::vec::Vec;
use num_traits::float::Float;

#[inline]
fn cross<T: Float>([ax, ay, az]: [T; 3], [bx, by, bz]: [T; 3]) -> [T; 3] {
    [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx]
}

/// Unit normal of the ring held in `data` (flat, stride 3), by Newell's
/// method. `None` when there are fewer than 3 vertices or the ring has no
/// usable normal (zero area).
fn ring_normal<T: Float>(data: &[T]) -> Option<[T; 3]> {
    let num_verts = data.len() / 3;
    if num_verts < 3 {
        return None;
    }

    let mut sum = [T::zero(); 3];
    let mut prev = [
        data[(num_verts - 1) * 3],
        data[(num_verts - 1) * 3 + 1],
        data[(num_verts - 1) * 3 + 2],
    ];
    for v in 0..num_verts {
        let cur = [data[v * 3], data[v * 3 + 1], data[v * 3 + 2]];
        let c = cross(
            [prev[0] - cur[0], prev[1] - cur[1], prev[2] - cur[2]],
            [prev[0] + cur[0], prev[1] + cur[1], prev[2] + cur[2]],
        );
        sum = [sum[0] + c[0], sum[1] + c[1], sum[2] + c[2]];
        prev = cur;
    }

    let d = (sum[0] * sum[0] + sum[1] * sum[1] + sum[2] * sum[2]).sqrt();
    if d < T::from(1e-30).unwrap() {
        return None;
    }
    Some([sum[0] / d, sum[1] / d, sum[2] / d])
}

/// Rotate the polygon's plane onto +z and write the resulting flat 2-D
/// coordinates into `out`. `data` is flat with stride 3; `outer_len` is
/// the outer ring's vertex count (hole vertices may follow and are
/// projected with the same transform). Returns `false`, leaving `out`
/// untouched, when the outer ring has no usable normal.
pub fn project_to_2d<T: Float>(data: &[T], outer_len: usize, out: &mut Vec<T>) -> bool {
    let Some([nx, ny, nz]) = ring_normal(&data[..outer_len * 3]) else {
        return false;
    };
    out.clear();

    let dd = (nx * nx + ny * ny).sqrt();
    if dd < T::from(1e-15).unwrap() {
        // normal already along z; keep as-is, or mirror when facing -z
        if nz > T::zero() {
            out.extend(data.chunks_exact(3).flat_map(|v| [v[0], v[1]]));
        } else {
            out.extend(data.chunks_exact(3).flat_map(|v| [v[1], v[0]]));
        }
    } else {
        // rotation about the in-plane axis perpendicular to the normal;
        // only the first two rows of the matrix are needed
        let ax = -ny / dd;
        let ay = nx / dd;
        let theta = nz.acos();
        let sint = theta.sin();
        let cost = theta.cos();
        let s = ax * ay * (T::one() - cost);
        let t = ay * sint;
        let u = ax * sint;
        let m11 = ax * ax * (T::one() - cost) + cost;
        let m12 = s;
        let m13 = -t;
        let m21 = s;
        let m22 = ay * ay * (T::one() - cost) + cost;
        let m23 = u;
        out.extend(data.chunks_exact(3).flat_map(|v| {
            let (x, y, z) = (v[0], v[1], v[2]);
            [x * m11 + y * m12 + z * m13, x * m21 + y * m22 + z * m23]
        }));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_flat() {
        let mut buf = Vec::new();
        let data = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 2.0, 2.0, 0.0];
        assert!(project_to_2d(&data, 3, &mut buf));
        assert!(buf == [0.0, 0.0, 2.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn flipped() {
        let mut buf = Vec::new();
        let data = [0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 2.0, 0.0, 0.0];
        assert!(project_to_2d(&data, 3, &mut buf));
        assert!(buf == [0.0, 0.0, 2.0, 2.0, 0.0, 2.0]);
    }

    #[test]
    fn rotated() {
        let mut buf = Vec::new();
        let data = [0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 2.0, 2.0];
        assert!(project_to_2d(&data, 3, &mut buf));
        assert!(buf == [0.0, 0.0, 2.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn empty_input() {
        let mut buf: Vec<f64> = Vec::new();
        let data: [f64; 0] = [];
        assert!(!project_to_2d(&data, 0, &mut buf));
    }

    #[test]
    fn zero_normal() {
        let data = [
            0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, //
            0.0, 0.0, 0.0, //
        ];
        assert!(ring_normal(&data).is_none());
    }
}
