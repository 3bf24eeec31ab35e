//! Task identity and cooperative cancellation.
//!
//! A [`TaskId`] names one unit of asynchronous work: the type that owns it
//! plus a process-wide generation counter, so two requests issued by the same
//! owner are still distinguishable. A [`TaskHandle`] pairs that identity with
//! a `CancellationToken`; cancellation is cooperative, so the producing side
//! must check the token before delivering a result.

use std::any::TypeId;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a spawned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    owner: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(owner: TypeId, generation: u64) -> Self {
        Self { owner, generation }
    }

    /// Allocate the next id for `owner` from the process-wide counter.
    pub fn next_for(owner: TypeId) -> Self {
        Self::new(owner, NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn owner(&self) -> TypeId {
        self.owner
    }

    /// Higher generations were allocated later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to an asynchronous task with cooperative cancellation.
///
/// Clones share one token: cancelling any clone cancels them all.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Request cancellation. The task must observe the token; nothing is
    /// forcibly aborted.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
