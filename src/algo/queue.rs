//! Fixed-capacity FIFO ring buffer of vertex indices (BFS frontier).

use crate::types::{GraphError, GraphResult};

/// Circular buffer holding at most `capacity` vertices.
pub(crate) struct Queue {
    buf: Vec<usize>,
    head: usize,
    len: usize,
}

impl Queue {
    /// Create an empty queue. Capacity never changes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Append a vertex at the back.
    pub(crate) fn enqueue(&mut self, vertex: usize) -> GraphResult<()> {
        if self.len == self.buf.len() {
            return Err(GraphError::CapacityExhausted {
                capacity: self.buf.len(),
            });
        }
        let tail = (self.head + self.len) % self.buf.len();
        self.buf[tail] = vertex;
        self.len += 1;
        Ok(())
    }

    /// Remove the vertex at the front.
    pub(crate) fn dequeue(&mut self) -> GraphResult<usize> {
        if self.len == 0 {
            return Err(GraphError::Underflow);
        }
        let vertex = self.buf[self.head];
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Ok(vertex)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }
}
