use crate::{Error, Result};
use itertools::Itertools;
use std::fmt::{self, Display};

/// A binary min-heap of `K` values, stored as a complete binary tree in a `Vec`.
/// The root is at index 0 and the children of `p` are at `2p+1` and `2p+2`.
/// Every parent is `<=` its children.
#[derive(Debug, Clone)]
pub struct MinHeap<K: Ord> {
    heap: Vec<K>,
}

impl<K: Ord> Default for MinHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> MinHeap<K> {
    /// Initialize a new heap.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The current minimum, without removing it.
    pub fn peek(&self) -> Option<&K> {
        self.heap.first()
    }

    /// The live elements in internal array order.
    pub fn as_slice(&self) -> &[K] {
        &self.heap
    }

    /// Push `value` and sift it up.
    /// `None` is ignored: the heap is left untouched.
    pub fn insert(&mut self, value: impl Into<Option<K>>) {
        let Some(value) = value.into() else {
            return;
        };
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the smallest value.
    /// The last element is moved to the root and sifted down.
    pub fn extract_min(&mut self) -> Result<K> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos] < self.heap[parent] {
                self.heap.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// On equal children the left one is kept: the right child has to be
    /// strictly smaller to be chosen.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;
            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.heap.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<K: Ord + Display> MinHeap<K> {
    /// Render the live elements in array order, e.g. `[1, 4, 2]`.
    /// Not sorted; this is for diagnostics only.
    pub fn render(&self) -> String {
        format!("[{}]", self.heap.iter().join(", "))
    }
}

impl<K: Ord + Display> Display for MinHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
