// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Cynthia Core
//!
//! Typed, range-constrained parameter model for procedurally generated
//! building elements (windows, doors, floors, roofs, stairs, railings).
//!
//! ## Overview
//!
//! - **Fields**: [`FieldSpec`] declares a field's kind, bounds and default.
//!   Numeric writes are clamped into range; mistyped writes are rejected.
//! - **Records**: [`Record`] is a fixed-shape tree of fields addressed by
//!   dotted paths such as `"arch.resolution"`.
//! - **Elements**: [`ElementKind`] maps each element to its schema, and the
//!   `*Config` structs in [`elements`] are the typed snapshots generators read.
//!
//! ## Quick Start
//!
//! ```rust
//! use cynthia_core::{ElementKind, Record, Value};
//! use cynthia_core::elements::WindowConfig;
//!
//! let mut record = Record::new(ElementKind::Window.schema());
//! record.set("type", "ARCHED").unwrap();
//! record.set("arch.resolution", 2000).unwrap(); // clamped to 1000
//! assert_eq!(record.get("arch.resolution").unwrap(), Value::Int(1000));
//!
//! let config = WindowConfig::resolve(&record).unwrap();
//! assert_eq!(config.arch.resolution, 1000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for [`Value`] and [`MaterialId`]

pub mod elements;
pub mod error;
pub mod field;
pub mod path;
pub mod record;
pub mod value;

pub use elements::ElementKind;
pub use error::{Error, Result};
pub use field::{FieldKind, FieldSpec};
pub use path::FieldPath;
pub use record::{Assignment, Record, RecordSchema};
pub use value::{MaterialId, Value};
