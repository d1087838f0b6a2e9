// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element registry: the ordered catalog of elements attached to one host.
//!
//! Entries are stored in a slot map keyed by [`EntryKey`]; a separate vector
//! keeps insertion order for listing. Exactly one entry is active whenever
//! the registry is non-empty.

use cynthia_core::{ElementKind, Record};
use cynthia_geometry::{GeneratedMesh, Region};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::keys::EntryKey;

/// One element: its configuration, placement and last good mesh
#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub name: String,
    pub record: Record,
    /// Placement supplied by the host, if any
    pub region: Option<Region>,
    /// Last successfully generated mesh
    pub mesh: Option<GeneratedMesh>,
    pub regenerations: u64,
}

impl Element {
    fn new(kind: ElementKind, name: String) -> Self {
        Self {
            kind,
            name,
            record: Record::new(kind.schema()),
            region: None,
            mesh: None,
            regenerations: 0,
        }
    }
}

/// Ordered element catalog of one host
#[derive(Debug, Default)]
pub struct Registry {
    elements: SlotMap<EntryKey, Element>,
    order: Vec<EntryKey>,
    active: Option<EntryKey>,
    names: FxHashMap<ElementKind, u32>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a default-configured element of `kind` and make it active.
    ///
    /// Singleton kinds return the existing entry instead. The flag reports
    /// whether a new entry was created.
    pub fn add(&mut self, kind: ElementKind) -> (EntryKey, bool) {
        if kind.is_singleton() {
            if let Some(existing) = self.find_kind(kind) {
                self.active = Some(existing);
                return (existing, false);
            }
        }

        let count = self.names.entry(kind).or_insert(0);
        *count += 1;
        let name = match *count {
            1 => kind.display_name().to_string(),
            n => format!("{} {}", kind.display_name(), n),
        };

        let key = self.elements.insert(Element::new(kind, name));
        self.order.push(key);
        self.active = Some(key);
        (key, true)
    }

    /// Delete an entry. When it was active, the entry before it (or the new
    /// first entry) becomes active.
    pub fn remove(&mut self, key: EntryKey) -> Option<Element> {
        let element = self.elements.remove(key)?;
        let position = self.order.iter().position(|k| *k == key)?;
        self.order.remove(position);

        if self.active == Some(key) {
            self.active = self
                .order
                .get(position.saturating_sub(1))
                .copied();
        }
        Some(element)
    }

    pub fn get(&self, key: EntryKey) -> Option<&Element> {
        self.elements.get(key)
    }

    pub fn get_mut(&mut self, key: EntryKey) -> Option<&mut Element> {
        self.elements.get_mut(key)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntryKey, &Element)> + '_ {
        self.order.iter().map(move |key| (*key, &self.elements[*key]))
    }

    /// Make `key` the active entry. Returns false if it does not exist.
    pub fn select(&mut self, key: EntryKey) -> bool {
        if self.elements.contains_key(key) {
            self.active = Some(key);
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<EntryKey> {
        self.active
    }

    /// First entry of `kind`, in insertion order
    pub fn find_kind(&self, kind: ElementKind) -> Option<EntryKey> {
        self.iter().find(|(_, e)| e.kind == kind).map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
