//! The ear-clipping core: a three-pass state machine over one ring.
//!
//! A full traversal that finds no ear escalates the pass: the first retry
//! prunes degenerate vertices, the second additionally cures small local
//! self-intersections, and the last resort splits the ring along a valid
//! diagonal and starts both halves over. Escalation and splitting never
//! recurse; follow-up rings go onto an explicit work list drained by the
//! caller, so stack depth stays constant no matter the input.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::geom::{
    corner_area, locally_inside, middle_inside, point_in_triangle, same_point, segments_cross,
};
use crate::node::{Arena, NodeId};
use crate::ring::prune_ring;
use crate::zorder::{index_ring, z_order};
use crate::TriIndex;

/// Remediation level for one ring. Transitions are one-directional; a ring
/// that stalls at `Split` with no valid diagonal simply stops emitting.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pass {
    Scan,
    Cure,
    Split,
}

/// Clip ears off one ring until it is exhausted or stalls. On a stall the
/// next remediation job is pushed onto `jobs`; a successful split pushes
/// both halves back at `Scan`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn clip_ears<T: Float, N: TriIndex>(
    arena: &mut Arena<T>,
    start: NodeId,
    triangles: &mut Vec<N>,
    min_x: T,
    min_y: T,
    inv_size: T,
    pass: Pass,
    jobs: &mut Vec<(NodeId, Pass)>,
    scratch: &mut Vec<NodeId>,
) {
    let mut ear_id = start;

    if pass == Pass::Scan && inv_size != T::zero() {
        index_ring(arena, ear_id, min_x, min_y, inv_size, scratch);
    }

    let mut stop = ear_id;
    loop {
        let ear = arena.at(ear_id);
        if ear.prev == ear.next {
            break;
        }
        let prev_id = ear.prev;
        let next_id = ear.next;

        let found = if inv_size != T::zero() {
            is_ear_indexed(arena, ear_id, min_x, min_y, inv_size)
        } else {
            is_ear(arena, ear_id)
        };
        if found {
            let next = arena.at(next_id);
            let next_vert = next.vert;
            let next_next = next.next;

            triangles.push(N::from_usize(arena.at(prev_id).vert as usize));
            triangles.push(N::from_usize(arena.at(ear_id).vert as usize));
            triangles.push(N::from_usize(next_vert as usize));

            arena.remove(ear_id);

            // skipping the next vertex leads to fewer sliver triangles
            ear_id = next_next;
            stop = next_next;
            continue;
        }

        ear_id = next_id;
        if ear_id == stop {
            // no more ears in a full traversal; escalate
            match pass {
                Pass::Scan => {
                    let filtered = prune_ring(arena, ear_id, None);
                    jobs.push((filtered, Pass::Cure));
                }
                Pass::Cure => {
                    let filtered = prune_ring(arena, ear_id, None);
                    let cured = cure_local_intersections(arena, filtered, triangles);
                    jobs.push((cured, Pass::Split));
                }
                Pass::Split => split_stalled(arena, ear_id, jobs),
            }
            return;
        }
    }
}

/// A vertex is an ear when its corner is convex and no other ring vertex
/// that is locally reflex lies inside the candidate triangle.
fn is_ear<T: Float>(arena: &Arena<T>, ear_id: NodeId) -> bool {
    let b = arena.at(ear_id);
    let a_id = b.prev;
    let c_id = b.next;
    let a = arena.at(a_id);
    let c = arena.at(c_id);

    if corner_area(a, b, c) >= T::zero() {
        // reflex corner
        return false;
    }

    let x0 = a.x.min(b.x.min(c.x));
    let y0 = a.y.min(b.y.min(c.y));
    let x1 = a.x.max(b.x.max(c.x));
    let y1 = a.y.max(b.y.max(c.y));

    let mut p_id = c.next;
    while p_id != a_id {
        let p = arena.at(p_id);
        if (p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1)
            && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, p.x, p.y)
            && corner_area(arena.at(p.prev), p, arena.at(p.next)) >= T::zero()
        {
            return false;
        }
        p_id = p.next;
    }
    true
}

/// Same predicate as [`is_ear`], but instead of scanning the whole ring it
/// walks outward from the ear along the z-order list in both directions,
/// stopping once the curve value leaves the ear's bounding-box range.
fn is_ear_indexed<T: Float>(
    arena: &Arena<T>,
    ear_id: NodeId,
    min_x: T,
    min_y: T,
    inv_size: T,
) -> bool {
    let b = arena.at(ear_id);
    let a_id = b.prev;
    let c_id = b.next;
    let a = arena.at(a_id);
    let c = arena.at(c_id);

    if corner_area(a, b, c) >= T::zero() {
        return false;
    }

    let x0 = a.x.min(b.x.min(c.x));
    let y0 = a.y.min(b.y.min(c.y));
    let x1 = a.x.max(b.x.max(c.x));
    let y1 = a.y.max(b.y.max(c.y));

    let min_z = z_order(x0, y0, min_x, min_y, inv_size);
    let max_z = z_order(x1, y1, min_x, min_y, inv_size);

    let mut back = b.zprev;
    let mut fwd = b.znext;

    // both directions at once while both stay in range
    loop {
        let Some(p_id) = back else { break };
        let p = arena.at(p_id);
        if p.z < min_z {
            break;
        }
        let Some(n_id) = fwd else { break };
        let n = arena.at(n_id);
        if n.z > max_z {
            break;
        }

        if (p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1)
            && (p_id != a_id && p_id != c_id)
            && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, p.x, p.y)
            && corner_area(arena.at(p.prev), p, arena.at(p.next)) >= T::zero()
        {
            return false;
        }
        back = p.zprev;

        if (n.x >= x0 && n.x <= x1 && n.y >= y0 && n.y <= y1)
            && (n_id != a_id && n_id != c_id)
            && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, n.x, n.y)
            && corner_area(arena.at(n.prev), n, arena.at(n.next)) >= T::zero()
        {
            return false;
        }
        fwd = n.znext;
    }

    // whichever direction is still in range
    while let Some(p_id) = back {
        let p = arena.at(p_id);
        if p.z < min_z {
            break;
        }
        if (p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1)
            && (p_id != a_id && p_id != c_id)
            && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, p.x, p.y)
            && corner_area(arena.at(p.prev), p, arena.at(p.next)) >= T::zero()
        {
            return false;
        }
        back = p.zprev;
    }
    while let Some(n_id) = fwd {
        let n = arena.at(n_id);
        if n.z > max_z {
            break;
        }
        if (n.x >= x0 && n.x <= x1 && n.y >= y0 && n.y <= y1)
            && (n_id != a_id && n_id != c_id)
            && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, n.x, n.y)
            && corner_area(arena.at(n.prev), n, arena.at(n.next)) >= T::zero()
        {
            return false;
        }
        fwd = n.znext;
    }
    true
}

/// Cure small local self-intersections: where the segment `prev..next.next`
/// crosses `p..p.next` and both replacement corners are mutually locally
/// inside, emit the repaired triangle and drop the two offending vertices.
fn cure_local_intersections<T: Float, N: TriIndex>(
    arena: &mut Arena<T>,
    start: NodeId,
    triangles: &mut Vec<N>,
) -> NodeId {
    let mut start = start;
    let mut p_id = start;
    loop {
        let p = arena.at(p_id);
        let q_id = p.next;
        let a_id = p.prev;
        let b_id = arena.at(q_id).next;
        let a = arena.at(a_id);
        let b = arena.at(b_id);
        let q = arena.at(q_id);

        if !same_point(a, b)
            && segments_cross(a, p, q, b)
            && locally_inside(arena, a_id, b_id)
            && locally_inside(arena, b_id, a_id)
        {
            let (av, pv, bv) = (a.vert, p.vert, b.vert);
            triangles.push(N::from_usize(av as usize));
            triangles.push(N::from_usize(pv as usize));
            triangles.push(N::from_usize(bv as usize));

            arena.remove(p_id);
            arena.remove(q_id);

            p_id = b_id;
            start = b_id;
        }
        p_id = arena.at(p_id).next;
        if p_id == start {
            return prune_ring(arena, p_id, None);
        }
    }
}

/// Last resort: find any valid internal diagonal, split the ring into two
/// along it, and queue both halves for a fresh scan. Stalls with no valid
/// diagonal leave the remaining vertices untriangulated.
fn split_stalled<T: Float>(arena: &mut Arena<T>, start: NodeId, jobs: &mut Vec<(NodeId, Pass)>) {
    let mut a_id = start;
    loop {
        let a = arena.at(a_id);
        let a_prev = a.prev;
        let a_next = a.next;
        let mut b_id = arena.at(a_next).next;

        while b_id != a_prev {
            if arena.at(a_id).vert != arena.at(b_id).vert && is_valid_diagonal(arena, a_id, b_id) {
                let mut c_id = arena.split_ring(a_id, b_id);

                let end = arena.at(a_id).next;
                let a2_id = prune_ring(arena, a_id, Some(end));
                let end = arena.at(c_id).next;
                c_id = prune_ring(arena, c_id, Some(end));

                // pushed in reverse so the first half pops first
                jobs.push((c_id, Pass::Scan));
                jobs.push((a2_id, Pass::Scan));
                return;
            }
            b_id = arena.at(b_id).next;
        }

        a_id = a_next;
        if a_id == start {
            return;
        }
    }
}

/// A diagonal is valid when its endpoints are not ring neighbors, it
/// crosses no ring edge, it is locally inside the polygon at both ends,
/// and its midpoint is inside; coincident endpoints are allowed only
/// between two convex corners.
fn is_valid_diagonal<T: Float>(arena: &Arena<T>, a_id: NodeId, b_id: NodeId) -> bool {
    let a = arena.at(a_id);
    let b = arena.at(b_id);
    let a_next = arena.at(a.next);
    let a_prev = arena.at(a.prev);
    let b_next = arena.at(b.next);
    let b_prev = arena.at(b.prev);

    (a_next.vert != b.vert && a_prev.vert != b.vert && !crosses_ring(arena, a_id, b_id))
        && (locally_inside(arena, a_id, b_id)
            && locally_inside(arena, b_id, a_id)
            && middle_inside(arena, a_id, b_id)
            && (corner_area(a_prev, a, b_prev) != T::zero()
                || corner_area(a, b_prev, b) != T::zero())
            || same_point(a, b)
                && corner_area(a_prev, a, a_next) > T::zero()
                && corner_area(b_prev, b, b_next) > T::zero())
}

/// Does the diagonal `ab` cross any ring edge not incident to `a` or `b`?
fn crosses_ring<T: Float>(arena: &Arena<T>, a_id: NodeId, b_id: NodeId) -> bool {
    let a = arena.at(a_id);
    let b = arena.at(b_id);
    let mut p_id = a_id;
    loop {
        let p = arena.at(p_id);
        let n = arena.at(p.next);
        if (p.vert != a.vert && p.vert != b.vert && n.vert != a.vert && n.vert != b.vert)
            && segments_cross(p, n, a, b)
        {
            return true;
        }
        p_id = p.next;
        if p_id == a_id {
            return false;
        }
    }
}
