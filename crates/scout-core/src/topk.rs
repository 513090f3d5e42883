//! Bounded top-K retention of records ranked by (age, name).
//!
//! A max-heap keyed on rank keeps the worst retained record at the top, so
//! eviction after an over-capacity insert is a single `pop`. Callers provide
//! synchronization; the scheduler holds its lock across every `offer`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::model::Record;

/// Heap entry. `seq` breaks exact (age, name) ties: the later offer ranks worse.
#[derive(Debug)]
struct Ranked {
    seq: u64,
    record: Record,
}

impl Ranked {
    fn key(&self) -> (i64, &str, u64) {
        (self.record.age, self.record.name.as_str(), self.seq)
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the `capacity` lowest-ranked records offered so far.
#[derive(Debug)]
pub struct TopKSelector {
    capacity: usize,
    heap: BinaryHeap<Ranked>,
    next_seq: u64,
}

impl TopKSelector {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Worst-ranked record currently retained.
    pub fn worst(&self) -> Option<&Record> {
        self.heap.peek().map(|r| &r.record)
    }

    /// Insert, then trim back to capacity. Returns false when the offered
    /// record itself was the one evicted.
    pub fn offer(&mut self, record: Record) -> bool {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Ranked { seq, record });
        if self.heap.len() > self.capacity {
            if let Some(evicted) = self.heap.pop() {
                return evicted.seq != seq;
            }
        }
        true
    }

    /// Remove and return every retained record, in no particular order.
    pub fn drain_all(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.heap)
            .into_vec()
            .into_iter()
            .map(|r| r.record)
            .collect()
    }
}
