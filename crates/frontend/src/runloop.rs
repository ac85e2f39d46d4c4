//! End-of-cycle scheduling for component lifecycle work.
//!
//! Mount/unmount hooks push registration tasks into one thread-local
//! `DeferredQueue`; the first task of a cycle queues a microtask that flushes
//! it. Focus changes wait one animation frame so the DOM reflects the new
//! selection first.

use leptos::prelude::*;
use std::cell::RefCell;
use tabset_core::{DeferredAction, DeferredQueue, InstanceKey};

thread_local! {
    static QUEUE: RefCell<DeferredQueue> = RefCell::new(DeferredQueue::new());
}

/// Run `task` at the end of the current cycle, at most once per
/// (key, action).
pub fn schedule_once(key: InstanceKey, action: DeferredAction, task: impl FnOnce() + 'static) {
    if enqueue(key, action, task) {
        queue_microtask(flush);
    }
}

/// Add the task to the thread-local queue. Returns `true` when it opened a
/// new cycle, i.e. a flush still has to be queued.
fn enqueue(key: InstanceKey, action: DeferredAction, task: impl FnOnce() + 'static) -> bool {
    QUEUE.with(|queue| {
        let mut queue = queue.borrow_mut();
        let was_empty = queue.is_empty();
        queue.schedule_once(key, action, task) && was_empty
    })
}

/// Run everything scheduled so far. Tasks scheduled while flushing land in
/// the next cycle.
pub fn flush() {
    let tasks = QUEUE.with(|queue| queue.borrow_mut().take());
    for task in tasks {
        task();
    }
}

pub fn after_render(task: impl FnOnce() + 'static) {
    request_animation_frame(task);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_same_key_and_action_run_once() {
        let hits = Rc::new(RefCell::new(0));
        let key = InstanceKey::new();

        let first = hits.clone();
        assert!(enqueue(key, DeferredAction::RegisterTab, move || *first.borrow_mut() += 1));
        let second = hits.clone();
        assert!(!enqueue(key, DeferredAction::RegisterTab, move || *second.borrow_mut() += 1));

        flush();
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_tasks_run_in_schedule_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let key = InstanceKey::new();

        let register = order.clone();
        assert!(enqueue(key, DeferredAction::RegisterTab, move || register.borrow_mut().push("register")));
        let unregister = order.clone();
        // Same cycle, flush already pending
        assert!(!enqueue(key, DeferredAction::UnregisterTab, move || unregister.borrow_mut().push("unregister")));

        flush();
        assert_eq!(*order.borrow(), vec!["register", "unregister"]);
    }

    #[test]
    fn test_work_scheduled_while_flushing_waits_for_next_cycle() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let key = InstanceKey::new();

        let outer = order.clone();
        enqueue(key, DeferredAction::RegisterTabList, move || {
            outer.borrow_mut().push("list");
            let inner = outer.clone();
            let opened = enqueue(InstanceKey::new(), DeferredAction::RegisterTab, move || {
                inner.borrow_mut().push("tab")
            });
            assert!(opened);
        });

        flush();
        assert_eq!(*order.borrow(), vec!["list"]);

        flush();
        assert_eq!(*order.borrow(), vec!["list", "tab"]);
    }
}
