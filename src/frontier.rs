//! Expansion-order policies for [best_first](crate::best_first::best_first).
//!
//! Entries refer to nodes by their index in the search's parent map and carry the cost the
//! node had when it was pushed, so stale entries can be recognised when popped.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Set of discovered nodes that still have to be expanded.
pub trait Frontier<C> {
    /// Adds the node stored at `index`. FIFO frontiers ignore `priority`.
    fn push(&mut self, index: usize, cost: C, priority: C);
    /// Removes the next node to expand, returning its index and the cost it was pushed with.
    fn pop(&mut self) -> Option<(usize, C)>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in first-out order, giving breadth-first search.
#[derive(Clone, Debug)]
pub struct FifoFrontier<C> {
    queue: VecDeque<(usize, C)>,
}

impl<C> Default for FifoFrontier<C> {
    fn default() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<C> Frontier<C> for FifoFrontier<C> {
    fn push(&mut self, index: usize, cost: C, _priority: C) {
        self.queue.push_back((index, cost));
    }
    fn pop(&mut self) -> Option<(usize, C)> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

struct SmallestPriorityHolder<K> {
    priority: K,
    sequence: u64,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestPriorityHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestPriorityHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestPriorityHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestPriorityHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both keys are reversed: lowest priority first, then
        // earliest insertion
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority order with ties broken by insertion sequence, used for Dijkstra and A*.
pub struct PriorityFrontier<C> {
    heap: BinaryHeap<SmallestPriorityHolder<C>>,
    next_sequence: u64,
}

impl<C: Ord> Default for PriorityFrontier<C> {
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<C: Ord> Frontier<C> for PriorityFrontier<C> {
    fn push(&mut self, index: usize, cost: C, priority: C) {
        self.heap.push(SmallestPriorityHolder {
            priority,
            sequence: self.next_sequence,
            cost,
            index,
        });
        self.next_sequence += 1;
    }
    fn pop(&mut self) -> Option<(usize, C)> {
        self.heap
            .pop()
            .map(|SmallestPriorityHolder { index, cost, .. }| (index, cost))
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}
