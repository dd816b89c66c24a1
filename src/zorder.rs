//! Morton-order spatial index over ring nodes. Large rings get a second
//! linked list sorted by z-order curve value, which lets the ear test walk
//! outward from a candidate ear and stop as soon as the curve leaves the
//! ear's bounding box range.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::node::{Arena, NodeId};

/// Spread the low 16 bits of `v` over the even bit positions.
#[inline]
fn spread(mut v: u32) -> u32 {
    v = (v | (v << 8)) & 0x00FF00FF;
    v = (v | (v << 4)) & 0x0F0F0F0F;
    v = (v | (v << 2)) & 0x33333333;
    v = (v | (v << 1)) & 0x55555555;
    v
}

/// Morton code of a point, quantized to 15-bit non-negative integers
/// against the longer side of the outer ring's bounding box. Points left
/// of or below the box clamp to 0.
pub(crate) fn z_order<T: Float>(x: T, y: T, min_x: T, min_y: T, inv_size: T) -> i32 {
    let x = ((x - min_x) * inv_size).to_u32().unwrap_or(0);
    let y = ((y - min_y) * inv_size).to_u32().unwrap_or(0);
    (spread(x) | (spread(y) << 1)) as i32
}

/// Thread the whole ring onto the z-order list: compute any missing Morton
/// codes, then relink `zprev`/`znext` in ascending code order. The sort is
/// stable, so nodes with equal codes keep their ring order. `scratch` is a
/// reused buffer owned by the caller.
pub(crate) fn index_ring<T: Float>(
    arena: &mut Arena<T>,
    start: NodeId,
    min_x: T,
    min_y: T,
    inv_size: T,
    scratch: &mut Vec<NodeId>,
) {
    scratch.clear();
    let mut p_id = start;
    loop {
        let p = arena.at_mut(p_id);
        if p.z == 0 {
            p.z = z_order(p.x, p.y, min_x, min_y, inv_size);
        }
        scratch.push(p_id);
        p_id = p.next;
        if p_id == start {
            break;
        }
    }

    scratch.sort_by_key(|&id| arena.at(id).z);

    let mut prev: Option<NodeId> = None;
    for &id in scratch.iter() {
        arena.at_mut(id).zprev = prev;
        if let Some(prev_id) = prev {
            arena.at_mut(prev_id).znext = Some(id);
        }
        prev = Some(id);
    }
    if let Some(last_id) = prev {
        arena.at_mut(last_id).znext = None;
    }
}
