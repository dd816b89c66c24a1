//! Ear-clipping triangulation of polygons with holes, over flat coordinate
//! arrays (the approach popularized by Mapbox's Earcut).
//!
//! Input is a flat slice of coordinates with a configurable stride, an
//! optional list of hole start indices in vertex units, and the output is a
//! list of vertex indices, three per triangle. The algorithm favors
//! robustness over validation: geometrically broken input degrades to a
//! partial or empty triangulation, it never panics and never returns an
//! error. Use [`deviation`] to measure how much area a triangulation
//! missed.
//!
//! ```
//! use ringcut::Triangulator;
//!
//! let square = [0.0, 0.0, 100.0, 0.0, 100.0, 100.0, 0.0, 100.0];
//! let mut triangles: Vec<u32> = Vec::new();
//! Triangulator::new().triangulate(&square, &[], 2, &mut triangles);
//! assert_eq!(triangles.len(), 6);
//! ```

#![no_std]

extern crate alloc;

mod ear;
mod geom;
mod hole;
mod node;
mod ring;
mod zorder;

pub mod plane;

use alloc::vec::Vec;
use num_traits::float::Float;

use ear::Pass;
use node::{Arena, NodeId};

/// Output index type of a triangulation.
pub trait TriIndex: Copy {
    fn into_usize(self) -> usize;
    fn from_usize(v: usize) -> Self;
}

impl TriIndex for u16 {
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}

impl TriIndex for u32 {
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}

impl TriIndex for usize {
    fn into_usize(self) -> usize {
        self
    }
    fn from_usize(v: usize) -> Self {
        v
    }
}

/// Rings above this many coordinates get the z-order spatial index for the
/// ear test instead of a linear ring scan.
const ZORDER_THRESHOLD: usize = 80;

/// Coordinates are quantized to this range for Morton codes.
const ZORDER_SCALE: f64 = 32767.0;

/// A reusable triangulation instance.
///
/// All node and queue storage lives on the instance and is recycled
/// between calls, so reusing one `Triangulator` across many polygons
/// avoids repeated allocation. Instances share nothing; distinct
/// polygons may be triangulated concurrently on distinct instances.
pub struct Triangulator<T: Float> {
    arena: Arena<T>,
    hole_queue: Vec<NodeId>,
    zorder_scratch: Vec<NodeId>,
    jobs: Vec<(NodeId, Pass)>,
}

impl<T: Float> Default for Triangulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Triangulator<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            hole_queue: Vec::new(),
            zorder_scratch: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Triangulate one polygon.
    ///
    /// `data` is a flat coordinate array with `dim` components per vertex
    /// (`dim >= 2`; only the first two are geometrically significant).
    /// Each value of `hole_indices` is the first vertex (in vertex units,
    /// not array offsets) of a hole ring; the outer ring occupies the
    /// vertices before the first hole index and the last hole extends to
    /// the end of the array. `triangles_out` is cleared and filled with
    /// vertex indices, three per triangle; degenerate input leaves it
    /// empty.
    pub fn triangulate<N: TriIndex>(
        &mut self,
        data: &[T],
        hole_indices: &[N],
        dim: usize,
        triangles_out: &mut Vec<N>,
    ) {
        debug_assert!(dim >= 2);
        let dim = dim.max(2);

        triangles_out.clear();
        let num_verts = data.len() / dim;
        if num_verts < 3 {
            return;
        }
        triangles_out.reserve(num_verts + 1);
        self.arena.reset(num_verts * 3 / 2);

        let outer_len = if hole_indices.is_empty() {
            num_verts
        } else {
            hole_indices[0].into_usize().min(num_verts)
        };

        let Some(mut outer) = ring::build_ring(&mut self.arena, data, 0, outer_len, dim, true)
        else {
            return;
        };
        {
            let node = self.arena.at(outer);
            if node.next == node.prev {
                return;
            }
        }
        if !hole_indices.is_empty() {
            outer = hole::eliminate_holes(
                &mut self.arena,
                data,
                hole_indices,
                dim,
                outer,
                &mut self.hole_queue,
            );
        }

        let mut min_x = T::zero();
        let mut min_y = T::zero();
        let mut inv_size = T::zero();

        // the z-order index pays off only past a size threshold; its
        // quantization grid is the outer ring's bounding box
        if data.len() > ZORDER_THRESHOLD * dim {
            min_x = data[0];
            min_y = data[1];
            let mut max_x = min_x;
            let mut max_y = min_y;
            for v in 1..outer_len {
                let x = data[v * dim];
                let y = data[v * dim + 1];
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
            inv_size = (max_x - min_x).max(max_y - min_y);
            if inv_size != T::zero() {
                inv_size = T::from(ZORDER_SCALE).unwrap() / inv_size;
            }
        }

        self.jobs.clear();
        self.jobs.push((outer, Pass::Scan));
        while let Some((start, pass)) = self.jobs.pop() {
            ear::clip_ears(
                &mut self.arena,
                start,
                triangles_out,
                min_x,
                min_y,
                inv_size,
                pass,
                &mut self.jobs,
                &mut self.zorder_scratch,
            );
        }
    }
}

/// Shoelace signed area of the vertex range `[start, end)` (vertex units,
/// stride `dim`). The sign encodes the ring's winding; `triangulate`
/// normalizes every ring it builds to a consistent internal orientation
/// using this value.
pub fn signed_area<T: Float>(data: &[T], start: usize, end: usize, dim: usize) -> T {
    let mut sum = T::zero();
    if end <= start {
        return sum;
    }
    let mut j = (end - 1) * dim;
    for v in start..end {
        let i = v * dim;
        sum = sum + (data[j] - data[i]) * (data[i + 1] + data[j + 1]);
        j = i;
    }
    sum
}

/// Relative difference between the polygon's area (outer minus holes) and
/// the summed area of `triangles`; 0 means the triangulation covers the
/// polygon exactly. This is the supported correctness check: failures
/// never raise errors, they only show up as missing area.
pub fn deviation<T: Float, N: TriIndex>(
    data: &[T],
    hole_indices: &[N],
    dim: usize,
    triangles: &[N],
) -> T {
    let dim = dim.max(2);
    let num_verts = data.len() / dim;
    let has_holes = !hole_indices.is_empty();
    let outer_len = if has_holes {
        hole_indices[0].into_usize().min(num_verts)
    } else {
        num_verts
    };

    let polygon_area = if num_verts < 3 {
        T::zero()
    } else {
        let mut area = signed_area(data, 0, outer_len, dim).abs();
        if has_holes {
            for k in 0..hole_indices.len() {
                let start = hole_indices[k].into_usize().min(num_verts);
                let end = if k + 1 < hole_indices.len() {
                    hole_indices[k + 1].into_usize().min(num_verts)
                } else {
                    num_verts
                };
                if end > start && end - start >= 3 {
                    area = area - signed_area(data, start, end, dim).abs();
                }
            }
        }
        area
    };

    let mut triangles_area = T::zero();
    for t in triangles.chunks_exact(3) {
        let a = t[0].into_usize() * dim;
        let b = t[1].into_usize() * dim;
        let c = t[2].into_usize() * dim;
        triangles_area = triangles_area
            + ((data[a] - data[c]) * (data[b + 1] - data[a + 1])
                - (data[a] - data[b]) * (data[c + 1] - data[a + 1]))
                .abs();
    }

    if polygon_area == T::zero() && triangles_area == T::zero() {
        T::zero()
    } else {
        ((polygon_area - triangles_area) / polygon_area).abs()
    }
}
