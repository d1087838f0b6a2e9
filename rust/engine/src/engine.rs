// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The engine: host objects, their registries, and change propagation.
//!
//! Every successful field write notifies the scheduler, which regenerates the
//! element synchronously before the write returns. Notifications raised while
//! the element is already regenerating (batched edits, write-backs of
//! generator inputs) are coalesced into one follow-up pass. Derived outputs
//! such as stair step sizes are stored without another pass. Elements whose placement derives
//! from the edited one are regenerated afterwards, each under its own guard.

use cynthia_core::elements::{FloorplanConfig, FloorsConfig};
use cynthia_core::{ElementKind, FieldPath, FieldSpec, Record, Value};
use cynthia_geometry::generators::floorplan;
use cynthia_geometry::{generate, Footprint, GeneratedMesh, Region, WallFace};
use slotmap::SlotMap;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::keys::{ElementId, HostKey};
use crate::registry::{Element, Registry};
use crate::scheduler::Scheduler;
use crate::sink::MeshSink;

/// Side of the square footprint a railing gets when placed without a region
const DEFAULT_RAILING_SIDE: f64 = 2.0;

#[derive(Debug)]
struct Host {
    name: String,
    registry: Registry,
}

/// Listing row of a registry entry
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: ElementId,
    pub kind: ElementKind,
    pub name: String,
}

/// Field writes grouped into one logical edit
pub struct Batch<'a> {
    id: ElementId,
    record: &'a mut Record,
    scheduler: &'a mut Scheduler,
}

impl Batch<'_> {
    pub fn get(&self, path: &str) -> cynthia_core::Result<Value> {
        self.record.get(path)
    }

    /// Write one field, returning the previous value
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> cynthia_core::Result<Value> {
        let assignment = self.record.assign(path, value)?;
        if assignment.changed() {
            // The batch holds the guard, so this only queues
            self.scheduler.enter(self.id);
        }
        Ok(assignment.previous)
    }
}

/// Owner of all hosts, their elements, and the mesh sink
pub struct Engine<S: MeshSink> {
    hosts: SlotMap<HostKey, Host>,
    scheduler: Scheduler,
    sink: S,
    config: EngineConfig,
}

impl<S: MeshSink> Engine<S> {
    /// Create an engine configured from the environment
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, EngineConfig::from_env())
    }

    pub fn with_config(sink: S, config: EngineConfig) -> Self {
        Self {
            hosts: SlotMap::with_key(),
            scheduler: Scheduler::new(),
            sink,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // ------------------------------------------------------------------
    // Host lifecycle
    // ------------------------------------------------------------------

    pub fn create_host(&mut self, name: impl Into<String>) -> HostKey {
        let name = name.into();
        debug!(host = %name, "host created");
        self.hosts.insert(Host {
            name,
            registry: Registry::new(),
        })
    }

    /// Destroy a host and every element attached to it
    pub fn destroy_host(&mut self, host: HostKey) -> Result<()> {
        let removed = self.hosts.remove(host).ok_or(Error::HostNotFound(host))?;
        for (entry, _) in removed.registry.iter() {
            let id = ElementId::new(host, entry);
            self.scheduler.forget(id);
            self.sink.discard(id);
        }
        debug!(host = %removed.name, elements = removed.registry.len(), "host destroyed");
        Ok(())
    }

    pub fn host_name(&self, host: HostKey) -> Result<&str> {
        Ok(&self.host(host)?.name)
    }

    // ------------------------------------------------------------------
    // Registry surface
    // ------------------------------------------------------------------

    /// Add a default-configured element and generate it.
    ///
    /// A failed first generation is logged and leaves the element without a
    /// mesh until its next edit; the entry is still created.
    pub fn add(&mut self, host: HostKey, kind: ElementKind) -> Result<ElementId> {
        self.insert(host, kind, None)
    }

    /// Add an element placed in `region`
    pub fn add_with_region(
        &mut self,
        host: HostKey,
        kind: ElementKind,
        region: Region,
    ) -> Result<ElementId> {
        self.insert(host, kind, Some(region))
    }

    fn insert(&mut self, host: HostKey, kind: ElementKind, region: Option<Region>) -> Result<ElementId> {
        let registry = &mut self.host_mut(host)?.registry;
        let (entry, created) = registry.add(kind);
        let id = ElementId::new(host, entry);

        match (region, registry.get_mut(entry)) {
            (Some(region), Some(element)) => element.region = Some(region),
            // Existing singleton, nothing changed
            _ if !created => return Ok(id),
            _ => {}
        }
        debug!(element = %id, kind = %kind, created, "element added");

        if let Err(err) = self.notify(id) {
            debug!(element = %id, error = %err, "element added without a mesh");
        }
        Ok(id)
    }

    /// Delete an element, discard its geometry, and regenerate the elements
    /// placed relative to it
    pub fn remove(&mut self, id: ElementId) -> Result<()> {
        let element = self
            .host_mut(id.host)?
            .registry
            .remove(id.entry)
            .ok_or(Error::NotFound(id))?;
        self.scheduler.forget(id);
        self.sink.discard(id);
        debug!(element = %id, kind = %element.kind, "element removed");

        // Failures are logged and leave the dependents' previous meshes
        if let Err(err) = self.regenerate_dependents(id.host, element.kind) {
            debug!(element = %id, error = %err, "dependent regeneration failed");
        }
        Ok(())
    }

    /// Entries of `host` in insertion order
    pub fn list(&self, host: HostKey) -> Result<Vec<Entry>> {
        Ok(self
            .host(host)?
            .registry
            .iter()
            .map(|(entry, element)| Entry {
                id: ElementId::new(host, entry),
                kind: element.kind,
                name: element.name.clone(),
            })
            .collect())
    }

    pub fn select(&mut self, id: ElementId) -> Result<()> {
        if self.host_mut(id.host)?.registry.select(id.entry) {
            Ok(())
        } else {
            Err(Error::NotFound(id))
        }
    }

    pub fn active(&self, host: HostKey) -> Result<Option<ElementId>> {
        Ok(self
            .host(host)?
            .registry
            .active()
            .map(|entry| ElementId::new(host, entry)))
    }

    pub fn rename(&mut self, id: ElementId, name: impl Into<String>) -> Result<()> {
        element_mut(&mut self.hosts, id)?.name = name.into();
        Ok(())
    }

    pub fn kind(&self, id: ElementId) -> Result<ElementKind> {
        Ok(self.element(id)?.kind)
    }

    // ------------------------------------------------------------------
    // Configuration surface
    // ------------------------------------------------------------------

    /// Every leaf field of `kind`, for building editing UIs
    pub fn catalog(&self, kind: ElementKind) -> Vec<(FieldPath, &'static FieldSpec)> {
        kind.schema().catalog()
    }

    pub fn get(&self, id: ElementId, path: &str) -> Result<Value> {
        Ok(self.element(id)?.record.get(path)?)
    }

    /// Write one field and regenerate the element before returning.
    ///
    /// Returns the previous value. A rejected value leaves the record
    /// untouched and regenerates nothing; a write equal to the stored value
    /// regenerates nothing either. When generation fails the write stays
    /// stored, the previous mesh stays visible, and the error is returned.
    pub fn set(&mut self, id: ElementId, path: &str, value: impl Into<Value>) -> Result<Value> {
        let assignment = element_mut(&mut self.hosts, id)?.record.assign(path, value)?;
        if assignment.changed() {
            self.notify(id)?;
        }
        Ok(assignment.previous)
    }

    /// Apply several writes as one logical edit with a single regeneration.
    ///
    /// Writes made before a failing one stay stored and are regenerated; the
    /// write error is returned after that.
    pub fn edit<F>(&mut self, id: ElementId, f: F) -> Result<()>
    where
        F: FnOnce(&mut Batch<'_>) -> cynthia_core::Result<()>,
    {
        let element = element_mut(&mut self.hosts, id)?;
        let claimed = self.scheduler.enter(id);
        let mut batch = Batch {
            id,
            record: &mut element.record,
            scheduler: &mut self.scheduler,
        };
        let written = f(&mut batch);
        if claimed {
            self.scheduler.leave(id);
        }

        let regenerated = if self.scheduler.take_pending(id) {
            self.notify(id)
        } else {
            Ok(())
        };
        written?;
        regenerated
    }

    /// Place an element and regenerate it
    pub fn set_region(&mut self, id: ElementId, region: Region) -> Result<()> {
        element_mut(&mut self.hosts, id)?.region = Some(region);
        self.notify(id)
    }

    pub fn region(&self, id: ElementId) -> Result<Option<&Region>> {
        Ok(self.element(id)?.region.as_ref())
    }

    // ------------------------------------------------------------------
    // Generation surface
    // ------------------------------------------------------------------

    /// Regenerate an element on demand and return its mesh
    pub fn generate(&mut self, id: ElementId) -> Result<GeneratedMesh> {
        self.run(id)?;
        self.element(id)?
            .mesh
            .clone()
            .ok_or(Error::NotFound(id))
    }

    /// Last successfully generated mesh
    pub fn mesh(&self, id: ElementId) -> Result<Option<&GeneratedMesh>> {
        Ok(self.element(id)?.mesh.as_ref())
    }

    /// Number of successful regenerations of an element so far
    pub fn regeneration_count(&self, id: ElementId) -> Result<u64> {
        Ok(self.element(id)?.regenerations)
    }

    // ------------------------------------------------------------------
    // Propagation
    // ------------------------------------------------------------------

    /// Regenerate `id` unless it is already regenerating, then its dependents
    fn notify(&mut self, id: ElementId) -> Result<()> {
        if self.scheduler.is_running(id) {
            self.scheduler.enter(id);
            return Ok(());
        }
        let kind = self.element(id)?.kind;
        let own = self.run(id);
        let dependents = self.regenerate_dependents(id.host, kind);
        own.and(dependents)
    }

    /// Regenerate `id` under its guard, draining queued notifications
    fn run(&mut self, id: ElementId) -> Result<()> {
        if !self.scheduler.enter(id) {
            return Ok(());
        }
        let result = self.drain(id);
        self.scheduler.leave(id);
        result
    }

    fn drain(&mut self, id: ElementId) -> Result<()> {
        let mut pass = 1;
        loop {
            let outcome = self.regenerate(id, pass);
            if !self.scheduler.take_pending(id) {
                return outcome;
            }
            if pass >= self.config.max_passes {
                warn!(element = %id, passes = pass, "regeneration did not settle; stopping");
                return outcome;
            }
            pass += 1;
        }
    }

    /// One generator run. On failure the previous mesh is kept.
    fn regenerate(&mut self, id: ElementId, pass: u32) -> Result<()> {
        let element = self.element(id)?;
        let kind = element.kind;
        let generation = self
            .region_for(id.host, kind, element.region.as_ref())
            .and_then(|region| generate(kind, &element.record, &region));

        let generation = match generation {
            Ok(generation) => generation,
            Err(err) => {
                warn!(element = %id, kind = %kind, error = %err, "generation failed; keeping previous mesh");
                return Err(err.into());
            }
        };

        let element = element_mut(&mut self.hosts, id)?;
        element.regenerations += 1;
        self.sink.replace(id, &generation.mesh);
        debug!(
            element = %id,
            kind = %kind,
            pass,
            faces = generation.mesh.mesh.face_count(),
            "regenerated"
        );
        element.mesh = Some(generation.mesh);

        // Generators never read derived fields, so storing one needs no new pass
        let mut follow_up = false;
        for (path, value) in generation.derived {
            let derived = element.record.spec(path)?.derived;
            follow_up |= element.record.assign(path, value)?.changed() && !derived;
        }
        if follow_up {
            self.notify(id)?;
        }
        Ok(())
    }

    /// Regenerate every element of `host` placed relative to `kind`,
    /// transitively, in dependency order
    fn regenerate_dependents(&mut self, host: HostKey, kind: ElementKind) -> Result<()> {
        let mut affected = vec![kind];
        for candidate in ElementKind::ALL {
            if candidate.dependencies().iter().any(|d| affected.contains(d)) {
                affected.push(candidate);
            }
        }

        let registry = &self.host(host)?.registry;
        let targets: Vec<ElementId> = affected[1..]
            .iter()
            .flat_map(|k| {
                registry
                    .iter()
                    .filter(move |(_, e)| e.kind == *k)
                    .map(|(entry, _)| ElementId::new(host, entry))
            })
            .collect();

        let mut first_error = None;
        for target in targets {
            if let Err(err) = self.run(target) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Region an element is generated into: the host's placement, or a
    /// derived or default one
    fn region_for(
        &self,
        host: HostKey,
        kind: ElementKind,
        placed: Option<&Region>,
    ) -> cynthia_geometry::Result<Region> {
        if let Some(region) = placed {
            return Ok(region.clone());
        }
        let config = &self.config;
        Ok(match kind {
            ElementKind::Window => Region::Wall(WallFace::upright(
                config.opening_width,
                config.opening_height,
            )?),
            ElementKind::Door | ElementKind::Balcony => {
                Region::Wall(WallFace::upright(config.door_width, config.door_height)?)
            }
            ElementKind::Floorplan | ElementKind::Stairs => Region::origin(),
            ElementKind::Railing => Region::Footprint(Footprint::rectangle(
                DEFAULT_RAILING_SIDE,
                DEFAULT_RAILING_SIDE,
                0.0,
            )),
            ElementKind::Floors => Region::Footprint(self.ground(host)?),
            ElementKind::Roof => {
                let ground = self.ground(host)?;
                let eaves = ground.elevation + self.storey_height(host)?;
                Region::Footprint(ground.lifted(eaves))
            }
        })
    }

    /// Footprint of the host's floorplan, or of a default one at the origin
    fn ground(&self, host: HostKey) -> cynthia_geometry::Result<Footprint> {
        let plan = self.first_of(host, ElementKind::Floorplan);
        let default;
        let (record, region) = match plan {
            Some(element) => (&element.record, element.region.clone()),
            None => {
                default = Record::new(ElementKind::Floorplan.schema());
                (&default, None)
            }
        };
        let region = region.unwrap_or_else(Region::origin);
        floorplan::footprint(&FloorplanConfig::resolve(record)?, &region)
    }

    /// Height of the host's floor stack, zero without one
    fn storey_height(&self, host: HostKey) -> cynthia_geometry::Result<f64> {
        match self.first_of(host, ElementKind::Floors) {
            Some(floors) => Ok(FloorsConfig::resolve(&floors.record)?.total_height()),
            None => Ok(0.0),
        }
    }

    fn first_of(&self, host: HostKey, kind: ElementKind) -> Option<&Element> {
        let registry = &self.hosts.get(host)?.registry;
        registry.find_kind(kind).and_then(|entry| registry.get(entry))
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    fn host(&self, host: HostKey) -> Result<&Host> {
        self.hosts.get(host).ok_or(Error::HostNotFound(host))
    }

    fn host_mut(&mut self, host: HostKey) -> Result<&mut Host> {
        self.hosts.get_mut(host).ok_or(Error::HostNotFound(host))
    }

    fn element(&self, id: ElementId) -> Result<&Element> {
        self.host(id.host)?
            .registry
            .get(id.entry)
            .ok_or(Error::NotFound(id))
    }
}

fn element_mut(hosts: &mut SlotMap<HostKey, Host>, id: ElementId) -> Result<&mut Element> {
    hosts
        .get_mut(id.host)
        .ok_or(Error::HostNotFound(id.host))?
        .registry
        .get_mut(id.entry)
        .ok_or(Error::NotFound(id))
}
