//! Ring construction and cleanup: flat coordinates in, circular doubly
//! linked vertex rings out.

use num_traits::float::Float;

use crate::geom::{corner_area, same_point};
use crate::node::{Arena, NodeId};
use crate::signed_area;

/// Build one circular ring from the vertex range `[start, end)` of `data`
/// (stride `dim`), inserting in reverse traversal order when the natural
/// winding of the range does not match the requested one. A repeated
/// closing point is collapsed so the seam carries no zero-length edge.
/// Returns the representative node, or `None` for an empty range.
pub(crate) fn build_ring<T: Float>(
    arena: &mut Arena<T>,
    data: &[T],
    start: usize,
    end: usize,
    dim: usize,
    clockwise: bool,
) -> Option<NodeId> {
    let mut last: Option<NodeId> = None;

    if clockwise == (signed_area(data, start, end, dim) > T::zero()) {
        for v in start..end {
            last = Some(arena.insert_after(v as u32, data[v * dim], data[v * dim + 1], last));
        }
    } else {
        for v in (start..end).rev() {
            last = Some(arena.insert_after(v as u32, data[v * dim], data[v * dim + 1], last));
        }
    }

    if let Some(last_id) = last {
        let node = arena.at(last_id);
        if same_point(node, arena.at(node.next)) {
            let (_, next) = arena.remove(last_id);
            return Some(next);
        }
    }
    last
}

/// Remove nodes that coincide with their successor or sit exactly on the
/// line through their neighbors, repeating until a full pass removes
/// nothing. Steiner nodes are exempt. Returns the surviving
/// representative; the ring may have degenerated by the time it does.
pub(crate) fn prune_ring<T: Float>(
    arena: &mut Arena<T>,
    start: NodeId,
    end: Option<NodeId>,
) -> NodeId {
    let mut end = end.unwrap_or(start);

    let mut p_id = start;
    loop {
        let p = arena.at(p_id);
        let next_id = p.next;
        let degenerate = !p.steiner
            && (same_point(p, arena.at(next_id))
                || corner_area(arena.at(p.prev), p, arena.at(next_id)) == T::zero());
        if degenerate {
            let (prev, next) = arena.remove(p_id);
            p_id = prev;
            end = prev;
            if p_id == next {
                return end;
            }
        } else {
            p_id = next_id;
            if p_id == end {
                return end;
            }
        }
    }
}

/// Leftmost node of a ring, ties broken towards the lowest y.
pub(crate) fn leftmost<T: Float>(arena: &Arena<T>, start: NodeId) -> NodeId {
    let mut best_id = start;
    let mut p_id = start;
    loop {
        let p = arena.at(p_id);
        let best = arena.at(best_id);
        if p.x < best.x || (p.x == best.x && p.y < best.y) {
            best_id = p_id;
        }
        p_id = p.next;
        if p_id == start {
            return best_id;
        }
    }
}
