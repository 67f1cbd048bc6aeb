//! Cooperative scheduling: delayed timers and next-render-frame tasks.
//!
//! Timers are queue entries, not threads. Cancellation is explicit via the
//! handle returned at scheduling time; a cancelled entry is skipped and
//! dropped when it comes due. Tasks are plain data so firing stays
//! deterministic and inspectable.

use std::collections::VecDeque;
use std::time::Instant;

/// Work a timer performs when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Hide the shared tooltip panel (hover-intent debounce).
    HideTooltip,
    /// Drop the overlay's displayed content after its close transition.
    ClearOverlay,
    /// Start a toast's exit transition.
    BeginToastExit(u64),
    /// Remove a toast once its exit transition has run.
    RemoveToast(u64),
}

/// Work performed on the next render frame (the animation-frame analog).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTask {
    /// Flip the tooltip panel visible so its fade-in registers.
    ShowTooltip,
    /// Move the overlay from Opening to Open.
    OpenOverlay,
    /// Move a toast from Entering to Shown.
    ShowToast(u64),
}

/// Handle for cancelling a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

/// A pending timer callback.
#[derive(Debug)]
pub struct PendingTimer {
    /// Unique timer ID.
    pub id: u64,
    /// When this timer should fire.
    pub fire_at: Instant,
    /// What to do when it fires.
    pub task: TimerTask,
    /// Whether this timer has been cancelled.
    pub cancelled: bool,
}

/// Queue of pending timers.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: VecDeque<PendingTimer>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task and return its cancellation handle.
    pub fn schedule(&mut self, fire_at: Instant, task: TimerTask) -> TimerHandle {
        self.next_id += 1;
        let id = self.next_id;
        self.timers.push_back(PendingTimer {
            id,
            fire_at,
            task,
            cancelled: false,
        });
        TimerHandle(id)
    }

    /// Mark a pending timer cancelled. No-op if it already fired.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if let Some(timer) = self.timers.iter_mut().find(|t| t.id == handle.0) {
            timer.cancelled = true;
        }
    }

    /// Remove and return the tasks of all timers due at `now`, in scheduling
    /// order. Cancelled entries are dropped silently.
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerTask> {
        let mut due = Vec::new();
        self.timers.retain(|t| {
            if t.fire_at > now {
                return true;
            }
            if !t.cancelled {
                due.push(t.task);
            }
            false
        });
        due
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

/// Queue of tasks to run on the next render frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: Vec<FrameTask>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: FrameTask) {
        self.pending.push(task);
    }

    pub fn drain(&mut self) -> Vec<FrameTask> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
