//! An ascending priority queue with stable (FIFO) tie-breaking.
//!
//! Elements are kept in a sequence sorted by non-decreasing weight. A new
//! element is placed after every existing element whose weight is less than
//! or equal to its own, so equal-weight elements pop in insertion order.
//! Tree shapes, and therefore codeword assignments, depend on this rule.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{HuffmanError, Result};

#[derive(Debug, Clone)]
struct Entry<T> {
    weight: u64,
    item: T,
}

/// Weight-ordered queue popping the lowest weight first.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    entries: VecDeque<Entry<T>>,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `item` after all entries with weight <= `weight`.
    pub fn insert(&mut self, weight: u64, item: T) {
        let pos = self.entries.partition_point(|e| e.weight <= weight);
        self.entries.insert(pos, Entry { weight, item });
    }

    /// Remove and return the front (minimum-weight) entry.
    pub fn pop_min(&mut self) -> Result<(u64, T)> {
        self.entries
            .pop_front()
            .map(|e| (e.weight, e.item))
            .ok_or(HuffmanError::PriorityQueueUnderflow)
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list:")?;
        for e in &self.entries {
            write!(f, " ({},{})", e.item, e.weight)?;
        }
        Ok(())
    }
}
