// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh sinks: host-owned targets that receive generated geometry.

use cynthia_geometry::GeneratedMesh;
use rustc_hash::FxHashMap;

use crate::keys::ElementId;

/// Receiver of generated meshes.
///
/// The engine calls [`MeshSink::replace`] only with complete, successfully
/// generated meshes, so a sink never observes partial geometry.
pub trait MeshSink {
    /// Swap the element's geometry and material slots for `mesh`
    fn replace(&mut self, element: ElementId, mesh: &GeneratedMesh);

    /// The element is gone; release its geometry
    fn discard(&mut self, element: ElementId);
}

/// Sink keeping the latest mesh of every element in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    meshes: FxHashMap<ElementId, GeneratedMesh>,
    replacements: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, element: ElementId) -> Option<&GeneratedMesh> {
        self.meshes.get(&element)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Total number of replacements received
    pub fn replacements(&self) -> u64 {
        self.replacements
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &GeneratedMesh)> {
        self.meshes.iter()
    }
}

impl MeshSink for MemorySink {
    fn replace(&mut self, element: ElementId, mesh: &GeneratedMesh) {
        self.replacements += 1;
        self.meshes.insert(element, mesh.clone());
    }

    fn discard(&mut self, element: ElementId) {
        self.meshes.remove(&element);
    }
}
