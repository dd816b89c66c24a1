//! Geometric predicates shared by the triangulation stages. All of them
//! work on exact floating-point comparisons; the algorithm's robustness
//! comes from the escalating remediation passes, not from tolerances.

use num_traits::float::Float;

use crate::node::{Arena, Node, NodeId};

/// Doubled signed area of the triangle `(p, q, r)`. Negative means a
/// convex corner under the normalized ring winding.
#[inline]
pub(crate) fn corner_area<T: Float>(p: &Node<T>, q: &Node<T>, r: &Node<T>) -> T {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

#[inline]
pub(crate) fn same_point<T: Float>(p: &Node<T>, q: &Node<T>) -> bool {
    p.x == q.x && p.y == q.y
}

#[inline]
fn sign<T: Float>(v: T) -> i32 {
    (v > T::zero()) as i32 - (v < T::zero()) as i32
}

/// For collinear `p`, `q`, `r`: does `q` lie on the segment `pr`?
#[inline]
fn on_segment<T: Float>(p: &Node<T>, q: &Node<T>, r: &Node<T>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Proper or degenerate intersection of segments `p1q1` and `p2q2`.
pub(crate) fn segments_cross<T: Float>(
    p1: &Node<T>,
    q1: &Node<T>,
    p2: &Node<T>,
    q2: &Node<T>,
) -> bool {
    let o1 = sign(corner_area(p1, q1, p2));
    let o2 = sign(corner_area(p1, q1, q2));
    let o3 = sign(corner_area(p2, q2, p1));
    let o4 = sign(corner_area(p2, q2, q1));
    (o1 != o2 && o3 != o4)
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o1 == 0 && on_segment(p1, p2, q1))
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub(crate) fn point_in_triangle<T: Float>(
    ax: T,
    ay: T,
    bx: T,
    by: T,
    cx: T,
    cy: T,
    px: T,
    py: T,
) -> bool {
    (cx - px) * (ay - py) >= (ax - px) * (cy - py)
        && (ax - px) * (by - py) >= (bx - px) * (ay - py)
        && (bx - px) * (cy - py) >= (cx - px) * (by - py)
}

/// Is the diagonal from `a` towards `b` inside the polygon in the
/// immediate neighborhood of `a`?
pub(crate) fn locally_inside<T: Float>(arena: &Arena<T>, a_id: NodeId, b_id: NodeId) -> bool {
    let a = arena.at(a_id);
    let b = arena.at(b_id);
    let a_prev = arena.at(a.prev);
    let a_next = arena.at(a.next);
    if corner_area(a_prev, a, a_next) < T::zero() {
        corner_area(a, b, a_next) >= T::zero() && corner_area(a, a_prev, b) >= T::zero()
    } else {
        corner_area(a, b, a_prev) < T::zero() || corner_area(a, a_next, b) < T::zero()
    }
}

/// Is the midpoint of the diagonal `ab` inside the polygon? Standard
/// even-odd ray cast over the ring.
pub(crate) fn middle_inside<T: Float>(arena: &Arena<T>, a_id: NodeId, b_id: NodeId) -> bool {
    let a = arena.at(a_id);
    let b = arena.at(b_id);
    let two = T::one() + T::one();
    let px = (a.x + b.x) / two;
    let py = (a.y + b.y) / two;

    let mut inside = false;
    let mut p_id = a_id;
    loop {
        let p = arena.at(p_id);
        let n = arena.at(p.next);
        inside ^= (p.y > py) != (n.y > py)
            && n.y != p.y
            && (px < (n.x - p.x) * (py - p.y) / (n.y - p.y) + p.x);
        p_id = p.next;
        if p_id == a_id {
            return inside;
        }
    }
}
