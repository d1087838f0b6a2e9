// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types for arena-based storage.
//!
//! Hosts and registry entries live in slot maps, so a key stays valid (or
//! reliably stale) after other entries are removed.

use std::fmt;

use slotmap::{new_key_type, Key};

new_key_type! {
    /// Key for a host object owning an element registry.
    pub struct HostKey;

    /// Key for an entry inside one host's registry.
    pub struct EntryKey;
}

/// Identity of one generated element: its host and its registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub host: HostKey,
    pub entry: EntryKey,
}

impl ElementId {
    pub fn new(host: HostKey, entry: EntryKey) -> Self {
        Self { host, entry }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = self.host.data().as_ffi();
        let entry = self.entry.data().as_ffi();
        // Low half is the slot index, high half the generation
        write!(
            f,
            "{}v{}/{}v{}",
            host as u32,
            host >> 32,
            entry as u32,
            entry >> 32
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn ids_compare_by_host_and_entry() {
        let mut hosts: SlotMap<HostKey, ()> = SlotMap::with_key();
        let mut entries: SlotMap<EntryKey, ()> = SlotMap::with_key();
        let (h1, h2) = (hosts.insert(()), hosts.insert(()));
        let entry = entries.insert(());

        assert_eq!(ElementId::new(h1, entry), ElementId::new(h1, entry));
        assert_ne!(ElementId::new(h1, entry), ElementId::new(h2, entry));
    }

    #[test]
    fn display_shows_slot_and_generation() {
        let mut hosts: SlotMap<HostKey, ()> = SlotMap::with_key();
        let mut entries: SlotMap<EntryKey, ()> = SlotMap::with_key();
        let host = hosts.insert(());
        let first = entries.insert(());
        entries.remove(first);
        let reused = entries.insert(());

        // Same slot, newer generation
        let shown = ElementId::new(host, reused).to_string();
        let stale = ElementId::new(host, first).to_string();
        let slot = |s: &str| s.split('/').nth(1).and_then(|e| e.split('v').next()).map(str::to_owned);
        assert_eq!(slot(&shown), slot(&stale));
        assert_ne!(shown, stale);
    }
}
