// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Cynthia Engine
//!
//! Element registry and change propagation for procedurally generated
//! building elements.
//!
//! Hosts own an ordered registry of elements. Writing a field through
//! [`Engine::set`] regenerates the element before the call returns; writes
//! made while the element is regenerating are coalesced into one follow-up
//! pass. Meshes are delivered to a [`MeshSink`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cynthia_engine::{ElementKind, Engine, EngineConfig, MemorySink};
//!
//! let mut engine = Engine::with_config(MemorySink::new(), EngineConfig::builtin());
//! let house = engine.create_host("House");
//! let window = engine.add(house, ElementKind::Window).unwrap();
//!
//! engine
//!     .edit(window, |batch| {
//!         batch.set("type", "ARCHED")?;
//!         batch.set("horizontal_panes", 2)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! // One regeneration on add, one for the whole edit
//! assert_eq!(engine.regeneration_count(window).unwrap(), 2);
//! assert!(engine.sink().get(window).is_some());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod keys;
pub mod registry;
pub mod scheduler;
pub mod sink;

pub use config::EngineConfig;
pub use engine::{Batch, Engine, Entry};
pub use error::{Error, Result};
pub use keys::{ElementId, EntryKey, HostKey};
pub use registry::{Element, Registry};
pub use scheduler::Scheduler;
pub use sink::{MemorySink, MeshSink};

pub use cynthia_core::{ElementKind, Value};
