use crate::{Error, MinHeap, Result};
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

/// The outcome of answering one query position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step<K> {
    pub query_position: usize,
    /// The cursor after advancing.
    pub cursor: usize,
    /// Permutation values pushed into the heap during this step, in scan order.
    pub inserted: Vec<K>,
    pub extracted: K,
}

/// Answers a sorted list of query positions with the smallest not-yet-consumed
/// value seen so far in the permutation, by feeding a [`MinHeap`] incrementally.
///
/// The cursor and heap always move together: every value pushed into the heap
/// was visited by the cursor, and nothing outside can change either one.
///
/// NOTE: The cursor is incremented before it is used as an index, so
/// `permutation[0]` is never pushed.
pub struct IndexScheduler<'a, K: Ord> {
    permutation: &'a [K],
    query_positions: &'a [usize],
    heap: MinHeap<K>,
    cursor: usize,
}

impl<'a, K: Ord + Copy + Debug> IndexScheduler<'a, K> {
    /// `None` stands for an absent input and is rejected.
    /// Neither sequence is validated further: query positions are assumed
    /// non-decreasing.
    pub fn new(permutation: Option<&'a [K]>, query_positions: Option<&'a [usize]>) -> Result<Self> {
        let permutation = permutation.ok_or(Error::InvalidArgument("permutation"))?;
        let query_positions = query_positions.ok_or(Error::InvalidArgument("query positions"))?;
        Ok(Self {
            permutation,
            query_positions,
            heap: MinHeap::with_capacity(permutation.len().saturating_sub(1)),
            cursor: 0,
        })
    }

    pub fn permutation(&self) -> &'a [K] {
        self.permutation
    }

    pub fn query_positions(&self) -> &'a [usize] {
        self.query_positions
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn queue(&self) -> &MinHeap<K> {
        &self.heap
    }

    pub fn is_queue_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Answer a single query position `idx`.
    ///
    /// Advances the cursor up to `idx`, pushing every in-bounds value it lands on,
    /// then extracts the minimum. Fails with [`Error::IllegalState`] when nothing
    /// is left to extract. The cursor and heap keep whatever state they reached.
    pub fn step(&mut self, idx: usize) -> Result<Step<K>> {
        let mut inserted = vec![];
        if self.cursor < idx {
            // Positions past the end insert nothing, so the cursor jumps there directly.
            let end = idx.min(self.permutation.len().saturating_sub(1));
            for pos in self.cursor + 1..=end {
                let v = self.permutation[pos];
                trace!(cursor = pos, value = ?v, "insert");
                self.heap.insert(v);
                inserted.push(v);
            }
            self.cursor = idx;
        }

        if self.is_queue_empty() {
            warn!(query_position = idx, cursor = self.cursor, "queue is empty");
            return Err(Error::IllegalState {
                query_position: idx,
            });
        }
        let extracted = self.heap.extract_min()?;
        debug!(
            query_position = idx,
            cursor = self.cursor,
            value = ?extracted,
            remaining = self.heap.size(),
            "extract"
        );

        Ok(Step {
            query_position: idx,
            cursor: self.cursor,
            inserted,
            extracted,
        })
    }

    /// Answer all query positions in order.
    ///
    /// Calling this again does not reset anything: the scan resumes at the
    /// current cursor, with whatever the heap still holds.
    pub fn associate_indices(&mut self) -> Result<Vec<K>> {
        let query_positions = self.query_positions;
        let mut result = Vec::with_capacity(query_positions.len());
        for &idx in query_positions {
            result.push(self.step(idx)?.extracted);
        }
        Ok(result)
    }
}
