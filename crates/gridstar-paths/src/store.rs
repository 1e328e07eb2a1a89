//! Arena of search nodes addressed by [`NodeHandle`].
//!
//! Parent links are handles into the same arena, so the search tree has no
//! ownership cycles and is freed in one step when the store is dropped.

use gridstar_core::Coord;

/// Stable index of a node inside a [`NodeStore`].
///
/// Handles are issued in creation order, which doubles as the frontier's
/// first-discovered tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Position of the node in creation order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One board cell as discovered by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub position: Coord,
    /// The node this one was generated from; `None` only for the start node.
    pub parent: Option<NodeHandle>,
    /// Cost of the best known route from the start.
    pub g: f64,
    /// Heuristic estimate to the goal, fixed at creation.
    pub h: f64,
    /// Always `g + h`.
    pub f: f64,
}

/// Dense arena owning every node created during one search.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: Vec<SearchNode>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a node and return its handle. `f` is derived as `g + h`.
    pub fn create(
        &mut self,
        parent: Option<NodeHandle>,
        position: Coord,
        g: f64,
        h: f64,
    ) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(SearchNode {
            position,
            parent,
            g,
            h,
            f: g + h,
        });
        handle
    }

    /// Read a node.
    ///
    /// # Panics
    ///
    /// Panics if `handle` was not issued by this store.
    #[inline]
    pub fn get(&self, handle: NodeHandle) -> &SearchNode {
        &self.nodes[handle.0]
    }

    /// Lower the cost of a node that is still open and re-parent it.
    ///
    /// Only the engine calls this, and only for nodes nothing points at yet.
    pub(crate) fn refine(&mut self, handle: NodeHandle, parent: NodeHandle, g: f64) {
        let node = &mut self.nodes[handle.0];
        node.parent = Some(parent);
        node.g = g;
        node.f = g + node.h;
    }

    /// Number of nodes ever created.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &SearchNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeHandle(i), n))
    }

    /// Walk parent links from `handle` back to the root, `handle` first.
    pub fn ancestors(&self, handle: NodeHandle) -> Ancestors<'_> {
        Ancestors {
            store: self,
            next: Some(handle),
        }
    }
}

/// Iterator over a node and its chain of parents. See [`NodeStore::ancestors`].
pub struct Ancestors<'a> {
    store: &'a NodeStore,
    next: Option<NodeHandle>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (NodeHandle, &'a SearchNode);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        let node = self.store.get(handle);
        self.next = node.parent;
        Some((handle, node))
    }
}
