//! `Frontier` — the open list of a best-first search.
//!
//! Nodes are bucketed by key in a `BTreeMap`; each bucket is a FIFO queue.
//! The key orders by ascending `f`, then by descending depth, so among equally
//! promising nodes the one closest to a complete solution is expanded first.
//! Nodes with identical keys come out in insertion order.  The result is a
//! fully deterministic expansion order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, VecDeque};
use std::ops::Add;

use crate::Node;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct FrontierKey<C> {
    f:     C,
    depth: Reverse<u32>,
}

/// Priority queue of search nodes ordered by `f = g + h`.
pub struct Frontier<S, C> {
    inner: BTreeMap<FrontierKey<C>, VecDeque<Node<S, C>>>,
    /// Cached total node count for O(1) `len()`.
    total: usize,
}

impl<S, C> Default for Frontier<S, C> {
    fn default() -> Self {
        Self { inner: BTreeMap::new(), total: 0 }
    }
}

impl<S, C> Frontier<S, C>
where
    C: Copy + Ord + Add<Output = C>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node<S, C>) {
        let key = FrontierKey { f: node.f(), depth: Reverse(node.depth) };
        self.inner.entry(key).or_default().push_back(node);
        self.total += 1;
    }

    /// Remove and return the best node, or `None` if the frontier is empty.
    pub fn pop(&mut self) -> Option<Node<S, C>> {
        let mut bucket = self.inner.first_entry()?;
        let node = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        if node.is_some() {
            self.total -= 1;
        }
        node
    }

    /// `f` of the node `pop` would return next.
    pub fn peek_f(&self) -> Option<C> {
        self.inner.keys().next().map(|k| k.f)
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct `(f, depth)` keys currently queued.
    pub fn key_count(&self) -> usize {
        self.inner.len()
    }
}
