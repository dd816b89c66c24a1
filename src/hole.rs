//! Hole elimination: every hole ring is spliced into the outer ring
//! through a bridge, leaving a single ring for the ear-clipping core.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::geom::{corner_area, locally_inside, point_in_triangle};
use crate::node::{Arena, Node, NodeId};
use crate::ring::{build_ring, leftmost, prune_ring};
use crate::TriIndex;

/// Build all hole rings and splice them into the outer ring. Holes are
/// processed by their leftmost vertex in ascending x, so bridges of
/// nested or adjacent holes cannot cross each other. Returns the
/// representative node of the combined ring.
pub(crate) fn eliminate_holes<T: Float, N: TriIndex>(
    arena: &mut Arena<T>,
    data: &[T],
    hole_indices: &[N],
    dim: usize,
    mut outer: NodeId,
    queue: &mut Vec<NodeId>,
) -> NodeId {
    queue.clear();
    let num_verts = data.len() / dim;

    for (k, hole_start) in hole_indices.iter().enumerate() {
        let start = (*hole_start).into_usize().min(num_verts);
        let end = if k + 1 < hole_indices.len() {
            hole_indices[k + 1].into_usize().min(num_verts)
        } else {
            num_verts
        };
        if let Some(ring) = build_ring(arena, data, start, end, dim, false) {
            let node = arena.at_mut(ring);
            if node.next == ring {
                node.steiner = true;
            }
            queue.push(leftmost(arena, ring));
        }
    }

    queue.sort_unstable_by(|&a, &b| {
        arena
            .at(a)
            .x
            .partial_cmp(&arena.at(b).x)
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    for &hole in queue.iter() {
        outer = splice_hole(arena, hole, outer);
    }
    outer
}

/// Splice one hole into the outer ring through a duplicated bridge pair,
/// then prune any collinear artifacts around both sides of the cut. A hole
/// with no bridge is dropped.
fn splice_hole<T: Float>(arena: &mut Arena<T>, hole: NodeId, outer: NodeId) -> NodeId {
    let Some(bridge) = find_bridge(arena, hole, outer) else {
        return outer;
    };
    let mirror = arena.split_ring(bridge, hole);

    let end = arena.at(mirror).next;
    prune_ring(arena, mirror, Some(end));
    let end = arena.at(bridge).next;
    prune_ring(arena, bridge, Some(end))
}

/// David Eberly's bridge construction: cast a leftward ray from the hole's
/// leftmost vertex, take the crossed outer edge with the rightmost
/// intersection, then refine the candidate endpoint to the visible vertex
/// minimizing the tangent angle to the ray.
fn find_bridge<T: Float>(arena: &Arena<T>, hole_id: NodeId, outer: NodeId) -> Option<NodeId> {
    let hole = arena.at(hole_id);
    let mut qx = T::neg_infinity();
    let mut m_id: Option<NodeId> = None;

    let mut p_id = outer;
    loop {
        let p = arena.at(p_id);
        let n = arena.at(p.next);
        if hole.y <= p.y && hole.y >= n.y && n.y != p.y {
            let x = p.x + (hole.y - p.y) * (n.x - p.x) / (n.y - p.y);
            if x <= hole.x && x > qx {
                qx = x;
                m_id = Some(if p.x < n.x { p_id } else { p.next });
                if x == hole.x {
                    // hole touches the outer segment; its endpoint is the bridge
                    return m_id;
                }
            }
        }
        p_id = p.next;
        if p_id == outer {
            break;
        }
    }

    let mut m_id = m_id?;

    // The candidate is visible along the ray, but another reflex vertex
    // inside the triangle (hole point, ray intersection, candidate) may
    // occlude the bridge; among such vertices pick the one with the
    // smallest tangent angle to the ray.
    let stop = m_id;
    let (mx, my) = {
        let m = arena.at(m_id);
        (m.x, m.y)
    };
    let mut tan_min = T::infinity();

    p_id = m_id;
    loop {
        let p = arena.at(p_id);
        if hole.x >= p.x
            && p.x >= mx
            && hole.x != p.x
            && point_in_triangle(
                if hole.y < my { hole.x } else { qx },
                hole.y,
                mx,
                my,
                if hole.y < my { qx } else { hole.x },
                hole.y,
                p.x,
                p.y,
            )
        {
            let tan = (hole.y - p.y).abs() / (hole.x - p.x);
            let m = arena.at(m_id);
            if locally_inside(arena, p_id, hole_id)
                && (tan < tan_min
                    || (tan == tan_min
                        && (p.x > m.x || (p.x == m.x && sector_contains(arena, m, p)))))
            {
                m_id = p_id;
                tan_min = tan;
            }
        }
        p_id = p.next;
        if p_id == stop {
            return Some(m_id);
        }
    }
}

/// Whether the sector at vertex `m` contains the sector at vertex `p`,
/// both taken at the same coordinates. Breaks ties between equal bridge
/// candidates without crossing the hole boundary.
fn sector_contains<T: Float>(arena: &Arena<T>, m: &Node<T>, p: &Node<T>) -> bool {
    corner_area(arena.at(m.prev), m, arena.at(p.prev)) < T::zero()
        && corner_area(arena.at(p.next), m, arena.at(m.next)) < T::zero()
}
