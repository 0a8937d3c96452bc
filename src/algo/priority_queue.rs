//! Fixed-capacity binary min-heap of `(vertex, priority)` pairs.
//!
//! Used by Dijkstra and Prim. Callers keep their own finalized markers and skip
//! any vertex that comes out of the heap after it was already settled.

use crate::types::{GraphError, GraphResult, Weight};

#[derive(Debug, Clone, Copy)]
struct HeapItem {
    vertex: usize,
    priority: Weight,
}

/// Min-heap ordered by priority. Ties keep no particular order.
pub(crate) struct PriorityQueue {
    heap: Vec<HeapItem>,
    capacity: usize,
}

impl PriorityQueue {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a vertex with the given priority.
    pub(crate) fn insert(&mut self, vertex: usize, priority: Weight) -> GraphResult<()> {
        if self.heap.len() == self.capacity {
            return Err(GraphError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        self.heap.push(HeapItem { vertex, priority });
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Remove the root and return its vertex.
    pub(crate) fn extract_min(&mut self) -> GraphResult<usize> {
        if self.heap.is_empty() {
            return Err(GraphError::Underflow);
        }
        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(root.vertex)
    }

    /// Lower a queued vertex's priority by linear search.
    ///
    /// Returns `false`, leaving the heap untouched, when the vertex is not queued.
    /// `priority` must not exceed the current one.
    pub(crate) fn decrease_key(&mut self, vertex: usize, priority: Weight) -> bool {
        match self.heap.iter().position(|item| item.vertex == vertex) {
            Some(slot) => {
                self.heap[slot].priority = priority;
                self.sift_up(slot);
                true
            }
            None => false,
        }
    }

    /// Lower a queued vertex's priority, or queue it if absent.
    pub(crate) fn push_or_decrease(&mut self, vertex: usize, priority: Weight) -> GraphResult<()> {
        if self.decrease_key(vertex, priority) {
            return Ok(());
        }
        self.insert(vertex, priority)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority <= self.heap[i].priority {
                break;
            }
            self.heap.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let mut smallest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left < n && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < n && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
