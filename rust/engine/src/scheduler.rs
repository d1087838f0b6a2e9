// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-element re-entrancy guard that coalesces change notifications.
//!
//! While an element is regenerating, further notifications for it only set a
//! pending flag. The owner of the guard checks the flag once the current pass
//! finishes and runs a single follow-up pass, however many notifications
//! arrived in between.

use rustc_hash::FxHashMap;

use crate::keys::ElementId;

#[derive(Debug, Default, Clone, Copy)]
struct Guard {
    running: bool,
    pending: bool,
}

/// Guards for every element currently known to the engine
#[derive(Debug, Default)]
pub struct Scheduler {
    guards: FxHashMap<ElementId, Guard>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id` for regeneration.
    ///
    /// Returns false when `id` is already regenerating further up the call
    /// stack; the notification is then queued for that caller.
    pub fn enter(&mut self, id: ElementId) -> bool {
        let guard = self.guards.entry(id).or_default();
        if guard.running {
            guard.pending = true;
            tracing::debug!(element = %id, "change coalesced into running regeneration");
            false
        } else {
            guard.running = true;
            guard.pending = false;
            true
        }
    }

    /// Release a guard claimed with [`Scheduler::enter`].
    pub fn leave(&mut self, id: ElementId) {
        if let Some(guard) = self.guards.get_mut(&id) {
            guard.running = false;
        }
    }

    pub fn is_running(&self, id: ElementId) -> bool {
        self.guards.get(&id).is_some_and(|g| g.running)
    }

    /// Consume the queued notification flag for `id`
    pub fn take_pending(&mut self, id: ElementId) -> bool {
        self.guards
            .get_mut(&id)
            .is_some_and(|g| std::mem::take(&mut g.pending))
    }

    /// Drop all state for a removed element
    pub fn forget(&mut self, id: ElementId) {
        self.guards.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{EntryKey, HostKey};
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<ElementId> {
        let mut hosts: SlotMap<HostKey, ()> = SlotMap::with_key();
        let mut entries: SlotMap<EntryKey, ()> = SlotMap::with_key();
        let host = hosts.insert(());
        (0..n)
            .map(|_| ElementId::new(host, entries.insert(())))
            .collect()
    }

    #[test]
    fn test_nested_notifications_coalesce() {
        let id = ids(1)[0];
        let mut scheduler = Scheduler::new();

        assert!(scheduler.enter(id));
        assert!(!scheduler.enter(id));
        assert!(!scheduler.enter(id));
        assert!(scheduler.is_running(id));

        // Three notifications, one follow-up
        assert!(scheduler.take_pending(id));
        assert!(!scheduler.take_pending(id));

        scheduler.leave(id);
        assert!(!scheduler.is_running(id));
        assert!(scheduler.enter(id));
    }

    #[test]
    fn test_elements_are_independent() {
        let ids = ids(2);
        let mut scheduler = Scheduler::new();

        assert!(scheduler.enter(ids[0]));
        assert!(scheduler.enter(ids[1]));
        assert!(!scheduler.take_pending(ids[0]));
    }

    #[test]
    fn test_forget_clears_state() {
        let id = ids(1)[0];
        let mut scheduler = Scheduler::new();
        scheduler.enter(id);
        scheduler.enter(id);
        scheduler.forget(id);

        assert!(!scheduler.is_running(id));
        assert!(!scheduler.take_pending(id));
    }
}
