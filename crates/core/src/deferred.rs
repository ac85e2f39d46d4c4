//! Deduplicating queue for work deferred to the end of the current cycle.
//!
//! Mount and unmount hooks do not touch registries directly: they schedule
//! a task keyed by (instance, action). Scheduling the same key again before
//! the flush is ignored, and the flush runs tasks in scheduling order.

use crate::model::InstanceKey;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredAction {
    RegisterTabList,
    UnregisterTabList,
    RegisterTab,
    UnregisterTab,
    RegisterPanel,
    UnregisterPanel,
}

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct DeferredQueue {
    seen: HashSet<(InstanceKey, DeferredAction)>,
    tasks: Vec<Task>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` unless the same (key, action) is already pending.
    /// Returns `true` when the task was queued.
    pub fn schedule_once(
        &mut self,
        key: InstanceKey,
        action: DeferredAction,
        task: impl FnOnce() + 'static,
    ) -> bool {
        if !self.seen.insert((key, action)) {
            log::debug!("{:?} for {} already pending", action, key);
            return false;
        }
        self.tasks.push(Box::new(task));
        true
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Drain pending tasks and open a new cycle. The caller runs them, which
    /// lets tasks schedule follow-up work without re-entering the queue.
    pub fn take(&mut self) -> Vec<Task> {
        self.seen.clear();
        std::mem::take(&mut self.tasks)
    }

    /// Run all pending tasks; returns how many ran.
    pub fn flush(&mut self) -> usize {
        let tasks = self.take();
        let count = tasks.len();
        for task in tasks {
            task();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_runs_in_schedule_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut queue = DeferredQueue::new();
        for n in 0..3 {
            let order = order.clone();
            queue.schedule_once(InstanceKey::new(), DeferredAction::RegisterTab, move || {
                order.borrow_mut().push(n)
            });
        }
        assert_eq!(queue.flush(), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_same_key_and_action_collapse() {
        let hits = Rc::new(RefCell::new(0));
        let key = InstanceKey::new();
        let mut queue = DeferredQueue::new();
        for _ in 0..3 {
            let hits = hits.clone();
            queue.schedule_once(key, DeferredAction::RegisterTab, move || {
                *hits.borrow_mut() += 1
            });
        }
        assert_eq!(queue.len(), 1);
        queue.flush();
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_register_and_unregister_are_distinct() {
        let key = InstanceKey::new();
        let mut queue = DeferredQueue::new();
        assert!(queue.schedule_once(key, DeferredAction::RegisterTab, || {}));
        assert!(queue.schedule_once(key, DeferredAction::UnregisterTab, || {}));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_new_cycle_after_flush() {
        let key = InstanceKey::new();
        let mut queue = DeferredQueue::new();
        queue.schedule_once(key, DeferredAction::RegisterPanel, || {});
        queue.flush();
        assert!(queue.schedule_once(key, DeferredAction::RegisterPanel, || {}));
    }
}
