use crate::core::state::{Pid, Ticks};
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Ordering key for ranked ready queues: the policy's sort value (burst time,
/// remaining time) plus the input index as the tie-break.
// KeyedPriorityQueue is a max-heap, so Rank's Ord is flipped to pop the
// smallest (key, index) pair first.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Rank {
    pub key: Ticks,
    pub index: Pid,
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.index.cmp(&self.index))
    }
}

#[derive(Debug)]
pub enum ReadyQueue {
    Fifo {
        procs: VecDeque<Pid>,
    },
    Ranked {
        procs: KeyedPriorityQueue<Pid, Rank>,
    },
}

impl ReadyQueue {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            procs: VecDeque::new(),
        }
    }

    pub fn new_ranked() -> Self {
        Self::Ranked {
            procs: KeyedPriorityQueue::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo { procs } => procs.len(),
            Self::Ranked { procs } => procs.len(),
        }
    }

    pub fn contains(&self, pid: Pid) -> bool {
        match self {
            Self::Fifo { procs } => procs.contains(&pid),
            Self::Ranked { procs } => procs.iter().any(|p| *p.0 == pid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_pops_smallest_key_first() {
        let mut procs: KeyedPriorityQueue<Pid, Rank> = KeyedPriorityQueue::new();
        procs.push(0, Rank { key: 5, index: 0 });
        procs.push(1, Rank { key: 2, index: 1 });
        procs.push(2, Rank { key: 9, index: 2 });

        assert_eq!(procs.pop().map(|p| p.0), Some(1));
        assert_eq!(procs.pop().map(|p| p.0), Some(0));
        assert_eq!(procs.pop().map(|p| p.0), Some(2));
    }

    #[test]
    fn rank_ties_break_by_input_index() {
        let mut procs: KeyedPriorityQueue<Pid, Rank> = KeyedPriorityQueue::new();
        procs.push(3, Rank { key: 4, index: 3 });
        procs.push(1, Rank { key: 4, index: 1 });
        procs.push(2, Rank { key: 4, index: 2 });

        assert_eq!(procs.pop().map(|p| p.0), Some(1));
        assert_eq!(procs.pop().map(|p| p.0), Some(2));
        assert_eq!(procs.pop().map(|p| p.0), Some(3));
    }
}
