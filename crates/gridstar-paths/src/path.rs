//! Rebuilding the start→goal route from parent links.

use gridstar_core::Coord;

use crate::error::{SearchError, SearchResult};
use crate::neighbors::Move;
use crate::store::{NodeHandle, NodeStore};

/// One node on a reconstructed path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub position: Coord,
    pub g: f64,
    pub h: f64,
    pub f: f64,
}

/// A route from start to goal.
///
/// `steps` holds every node including both endpoints; `moves` holds one
/// entry per edge, so `moves.len() == steps.len() - 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<PathStep>,
    moves: Vec<Move>,
}

impl Path {
    /// Number of edges traversed.
    #[inline]
    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    /// The moves from start to goal.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Every node on the path, start first.
    #[inline]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// `f` of every node on the path, start first.
    pub fn costs(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().map(|s| s.f)
    }

    /// Board positions on the path, start first.
    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.steps.iter().map(|s| s.position)
    }

    pub fn start(&self) -> Option<Coord> {
        self.steps.first().map(|s| s.position)
    }

    pub fn goal(&self) -> Option<Coord> {
        self.steps.last().map(|s| s.position)
    }

    /// Accumulated cost `g` at the goal.
    pub fn total_cost(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.g)
    }
}

/// Follow parent links from `goal` back to the root and return the route in
/// start→goal order.
///
/// Fails with [`SearchError::NonAdjacentStep`] if a link skips cells, which
/// can only happen if the store was built incorrectly.
pub fn reconstruct(store: &NodeStore, goal: NodeHandle) -> SearchResult<Path> {
    let mut steps = Vec::new();
    let mut moves = Vec::new();

    for (_, node) in store.ancestors(goal) {
        steps.push(PathStep {
            position: node.position,
            g: node.g,
            h: node.h,
            f: node.f,
        });
        if let Some(parent) = node.parent {
            let from = store.get(parent).position;
            let mv = Move::between(from, node.position).ok_or(SearchError::NonAdjacentStep {
                from,
                to: node.position,
            })?;
            moves.push(mv);
        }
    }

    steps.reverse();
    moves.reverse();
    Ok(Path { steps, moves })
}
