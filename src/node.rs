use alloc::vec::Vec;
use core::num::NonZeroU32;
use num_traits::float::Float;

/// Arena id of a vertex node. Slot 0 of the arena is a sentinel, so live
/// ids are never zero and `Option<NodeId>` costs nothing.
pub(crate) type NodeId = NonZeroU32;

pub(crate) struct Node<T> {
    /// index of this vertex in the input array, in vertex units; never
    /// changes after creation and is what output triangles carry
    pub vert: u32,
    pub x: T,
    pub y: T,
    /// Morton code, 0 until computed
    pub z: i32,
    /// ring neighbors; always mutual inverses
    pub prev: NodeId,
    pub next: NodeId,
    /// z-order neighbors; a separate list from the ring topology
    pub zprev: Option<NodeId>,
    pub znext: Option<NodeId>,
    /// single-vertex hole; never treated as a polygon corner
    pub steiner: bool,
}

impl<T: Float> Node<T> {
    fn new(vert: u32, x: T, y: T) -> Self {
        Self {
            vert,
            x,
            y,
            z: 0,
            prev: NodeId::MIN,
            next: NodeId::MIN,
            zprev: None,
            znext: None,
            steiner: false,
        }
    }
}

/// Owns every node of one triangulation call. Rings are circular doubly
/// linked lists threaded through the arena by id; removal is O(1) pointer
/// rewiring and the storage is recycled wholesale on the next call.
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Float> Arena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn reset(&mut self, capacity: usize) {
        self.nodes.clear();
        self.nodes.reserve(capacity);
        // sentinel keeps live ids non-zero
        self.nodes.push(Node::new(0, T::infinity(), T::infinity()));
    }

    #[inline]
    pub fn at(&self, id: NodeId) -> &Node<T> {
        debug_assert!((id.get() as usize) < self.nodes.len());
        unsafe { self.nodes.get_unchecked(id.get() as usize) }
    }

    #[inline]
    pub fn at_mut(&mut self, id: NodeId) -> &mut Node<T> {
        debug_assert!((id.get() as usize) < self.nodes.len());
        unsafe { self.nodes.get_unchecked_mut(id.get() as usize) }
    }

    #[inline]
    fn next_id(&self) -> NodeId {
        debug_assert!(!self.nodes.is_empty());
        unsafe { NodeId::new_unchecked(self.nodes.len() as u32) }
    }

    /// Create a node and append it after `last` in its ring; with no `last`
    /// the node forms a one-element ring by itself.
    pub fn insert_after(&mut self, vert: u32, x: T, y: T, last: Option<NodeId>) -> NodeId {
        let id = self.next_id();
        let mut node = Node::new(vert, x, y);
        match last {
            Some(last_id) => {
                let last = self.at_mut(last_id);
                let last_next = last.next;
                last.next = id;
                node.prev = last_id;
                node.next = last_next;
                self.at_mut(last_next).prev = id;
            }
            None => {
                node.prev = id;
                node.next = id;
            }
        }
        self.nodes.push(node);
        id
    }

    /// Unlink a node from its ring and from the z-order list; returns its
    /// former `(prev, next)` neighbors.
    pub fn remove(&mut self, id: NodeId) -> (NodeId, NodeId) {
        let node = self.at(id);
        let (prev, next) = (node.prev, node.next);
        let (zprev, znext) = (node.zprev, node.znext);

        self.at_mut(next).prev = prev;
        self.at_mut(prev).next = next;

        if let Some(zp) = zprev {
            self.at_mut(zp).znext = znext;
        }
        if let Some(zn) = znext {
            self.at_mut(zn).zprev = zprev;
        }
        (prev, next)
    }

    /// Connect `a` and `b` through a duplicated pair of nodes. If both lie
    /// on the same ring this splits it in two; if they lie on different
    /// rings (outer ring and hole) it merges them into one. Returns the
    /// duplicate of `b`, which represents the second resulting ring.
    pub fn split_ring(&mut self, a_id: NodeId, b_id: NodeId) -> NodeId {
        let a2_id = self.next_id();
        let b2_id = unsafe { NodeId::new_unchecked(a2_id.get() + 1) };

        let a = self.at_mut(a_id);
        let mut a2 = Node::new(a.vert, a.x, a.y);
        let a_next = a.next;
        a.next = b_id;
        a2.prev = b2_id;
        a2.next = a_next;
        self.at_mut(a_next).prev = a2_id;

        let b = self.at_mut(b_id);
        let mut b2 = Node::new(b.vert, b.x, b.y);
        let b_prev = b.prev;
        b.prev = a_id;
        b2.next = a2_id;
        b2.prev = b_prev;
        self.at_mut(b_prev).next = b2_id;

        self.nodes.push(a2);
        self.nodes.push(b2);
        b2_id
    }
}
