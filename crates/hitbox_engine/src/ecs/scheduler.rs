//! Frame and interval task scheduling
//!
//! Tasks are run synchronously, in registration order, by [`Scheduler::tick`].
//! Every-frame tasks run once per tick. Interval tasks accumulate elapsed time
//! and run once for every full period that has passed, so a long frame can
//! fire an interval task several times.

use slotmap::SlotMap;

use crate::session::Session;

slotmap::new_key_type! {
    /// Handle to an installed task, used for cancellation
    pub struct TaskHandle;
}

/// Callback run by the scheduler against the session
pub type TaskCallback = Box<dyn FnMut(&mut Session)>;

/// When a task runs
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cadence {
    EveryFrame,
    Interval { period_ms: f64, elapsed_ms: f64 },
}

struct ScheduledTask {
    cadence: Cadence,
    callback: TaskCallback,
}

/// Single-threaded task scheduler driven by the game loop
pub struct Scheduler {
    tasks: SlotMap<TaskHandle, ScheduledTask>,
    /// Registration order; slot map iteration order is not stable across removals
    order: Vec<TaskHandle>,
    frame_count: u64,
}

impl Scheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            order: Vec::new(),
            frame_count: 0,
        }
    }

    /// Run `callback` once per tick
    pub fn on_every_frame<F>(&mut self, callback: F) -> TaskHandle
    where
        F: FnMut(&mut Session) + 'static,
    {
        self.install(Cadence::EveryFrame, Box::new(callback))
    }

    /// Run `callback` once per elapsed `period_ms` (a period of 0 is treated as 1)
    pub fn on_every_interval<F>(&mut self, period_ms: u32, callback: F) -> TaskHandle
    where
        F: FnMut(&mut Session) + 'static,
    {
        let cadence = Cadence::Interval {
            period_ms: f64::from(period_ms.max(1)),
            elapsed_ms: 0.0,
        };
        self.install(cadence, Box::new(callback))
    }

    fn install(&mut self, cadence: Cadence, callback: TaskCallback) -> TaskHandle {
        let handle = self.tasks.insert(ScheduledTask { cadence, callback });
        self.order.push(handle);
        log::debug!("Installed {cadence:?} task {handle:?}");
        handle
    }

    /// Stop a task. Returns `false` if it was already cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        if self.tasks.remove(handle).is_none() {
            return false;
        }
        self.order.retain(|&h| h != handle);
        log::debug!("Cancelled task {handle:?}");
        true
    }

    /// Whether the task is still installed
    pub fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(handle)
    }

    /// Number of installed tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of ticks run so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance one frame of `delta_ms` milliseconds
    pub fn tick(&mut self, session: &mut Session, delta_ms: f64) {
        self.frame_count += 1;

        for handle in &self.order {
            let Some(task) = self.tasks.get_mut(*handle) else {
                continue;
            };

            match &mut task.cadence {
                Cadence::EveryFrame => (task.callback)(session),
                Cadence::Interval { period_ms, elapsed_ms } => {
                    *elapsed_ms += delta_ms;
                    while *elapsed_ms >= *period_ms {
                        *elapsed_ms -= *period_ms;
                        (task.callback)(session);
                    }
                }
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
