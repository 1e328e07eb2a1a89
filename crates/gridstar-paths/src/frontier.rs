//! The open set: a binary heap ordered by `f`, ties broken by discovery order.
//!
//! Decrease-key is lazy. Re-prioritising a node pushes a fresh heap entry;
//! the superseded entry is recognised as stale when it surfaces and skipped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::store::{NodeHandle, NodeStore};

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first and, among equal `f`, the earliest-created node.
#[derive(Debug, Clone, Copy)]
struct Entry {
    f: f64,
    handle: NodeHandle,
    slot: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.handle.cmp(&self.handle))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of open nodes with at most one live node per board slot.
///
/// A *slot* is the flat board index of a node's position.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    open: Vec<Option<NodeHandle>>,
    live: usize,
}

impl Frontier {
    /// Create an empty frontier for a board with `slots` cells.
    pub fn new(slots: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            open: vec![None; slots],
            live: 0,
        }
    }

    /// Insert `handle` at `slot` with priority `f`, or re-prioritise it if it
    /// is already the open node there.
    pub fn push(&mut self, slot: usize, handle: NodeHandle, f: f64) {
        if self.open[slot].is_none() {
            self.live += 1;
        }
        self.open[slot] = Some(handle);
        self.heap.push(Entry { f, handle, slot });
    }

    /// The open node at `slot`, if any.
    #[inline]
    pub fn open_at(&self, slot: usize) -> Option<NodeHandle> {
        self.open[slot]
    }

    /// Remove and return the open node with the smallest `f`.
    ///
    /// Entries whose node has since been popped or re-prioritised are
    /// discarded along the way.
    pub fn pop(&mut self, store: &NodeStore) -> Option<NodeHandle> {
        while let Some(e) = self.heap.pop() {
            if self.open[e.slot] != Some(e.handle) {
                continue;
            }
            if store.get(e.handle).f.to_bits() != e.f.to_bits() {
                continue;
            }
            self.open[e.slot] = None;
            self.live -= 1;
            return Some(e.handle);
        }
        None
    }

    /// Number of live open nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}
