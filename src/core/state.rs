use crate::core::queue::{Rank, ReadyQueue};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

// Index into the process table; assigned in input order, so `Pid` doubles as
// the tie-break rank for "earliest in the original input".
pub type Pid = usize;
pub type Ticks = u64;

new_key_type! {
    pub struct QueueId;
}

#[derive(Debug, Clone)]
pub struct Proc {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub completion: Option<Ticks>,
}

impl Proc {
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Run-scoped simulation state: the clock, the process table, and the
/// ready-queue registry. Built fresh for every algorithm invocation and
/// dropped when the run returns.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub procs: Vec<Proc>,
    pub queues: SlotMap<QueueId, ReadyQueue>,
    pub proc_to_queue: FxHashMap<Pid, QueueId>,
}

impl SimCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            procs: Vec::new(),
            queues: SlotMap::with_key(),
            proc_to_queue: FxHashMap::default(),
        }
    }

    pub fn create_proc(&mut self, arrival: Ticks, burst: Ticks) -> Pid {
        let pid = self.procs.len();
        self.procs.push(Proc {
            pid,
            arrival,
            burst,
            remaining: burst,
            completion: None,
        });
        pid
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn create_fifo_queue(&mut self) -> QueueId {
        self.queues.insert(ReadyQueue::new_fifo())
    }

    pub fn create_ranked_queue(&mut self) -> QueueId {
        self.queues.insert(ReadyQueue::new_ranked())
    }

    pub fn queue_push_back(&mut self, queue_id: QueueId, pid: Pid) {
        self.track_membership(queue_id, pid);
        match self.queues.get_mut(queue_id).expect("unknown queue") {
            ReadyQueue::Fifo { procs } => procs.push_back(pid),
            ReadyQueue::Ranked { .. } => panic!("FIFO push into a ranked queue"),
        }
    }

    pub fn queue_push_ranked(&mut self, queue_id: QueueId, pid: Pid, key: Ticks) {
        self.track_membership(queue_id, pid);
        match self.queues.get_mut(queue_id).expect("unknown queue") {
            ReadyQueue::Ranked { procs } => {
                procs.push(pid, Rank { key, index: pid });
            }
            ReadyQueue::Fifo { .. } => panic!("ranked push into a FIFO queue"),
        }
    }

    pub fn queue_pop(&mut self, queue_id: QueueId) -> Option<Pid> {
        let queue = self.queues.get_mut(queue_id)?;
        let pid = match queue {
            ReadyQueue::Fifo { procs } => procs.pop_front(),
            ReadyQueue::Ranked { procs } => procs.pop().map(|p| p.0),
        }?;

        let removed = self.proc_to_queue.remove(&pid);
        debug_assert!(removed.is_some(), "proc {pid} missing queue membership");

        Some(pid)
    }

    pub fn queue_is_empty(&self, queue_id: QueueId) -> bool {
        self.queues.get(queue_id).expect("unknown queue").is_empty()
    }

    pub fn in_any_queue(&self, pid: Pid) -> bool {
        self.proc_to_queue.contains_key(&pid)
    }

    fn track_membership(&mut self, queue_id: QueueId, pid: Pid) {
        assert!(
            !self.proc_to_queue.contains_key(&pid),
            "proc {pid} already present in some ready queue"
        );
        debug_assert!(
            !self.procs[pid].is_complete(),
            "proc {pid} must not be complete when enqueued"
        );
        self.proc_to_queue.insert(pid, queue_id);
    }

    pub fn proc(&self, pid: Pid) -> &Proc {
        &self.procs[pid]
    }

    pub fn proc_mut(&mut self, pid: Pid) -> &mut Proc {
        &mut self.procs[pid]
    }

    pub fn mark_completed(&mut self, pid: Pid) {
        debug_assert!(
            !self.proc_to_queue.contains_key(&pid),
            "completing proc {pid} that is still enqueued"
        );

        let now = self.now;
        let proc = &mut self.procs[pid];
        debug_assert_eq!(proc.remaining, 0, "proc {pid} completed with work remaining");
        debug_assert!(proc.completion.is_none(), "proc {pid} completed twice");
        proc.completion = Some(now);
    }

    pub fn all_complete(&self) -> bool {
        self.procs.iter().all(Proc::is_complete)
    }
}

impl Default for SimCtx {
    fn default() -> Self {
        Self::new()
    }
}
