// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Cynthia Geometry
//!
//! Mesh generation for parametric building elements, using nalgebra for
//! transformations and earcutr for triangulation.
//!
//! Generators turn a resolved element record plus a placement [`Region`]
//! into a polygon [`Mesh`] whose faces are partitioned into named material
//! groups.
//!
//! ```rust
//! use cynthia_core::{ElementKind, Record};
//! use cynthia_geometry::{generate, Region, WallFace};
//!
//! let mut record = Record::new(ElementKind::Window.schema());
//! record.set("type", "ARCHED").unwrap();
//!
//! let wall = Region::Wall(WallFace::upright(1.0, 1.5).unwrap());
//! let generation = generate(ElementKind::Window, &record, &wall).unwrap();
//! assert!(!generation.mesh.mesh.group_faces("glass").is_empty());
//! ```

pub mod arc;
pub mod error;
pub mod export;
pub mod extrusion;
pub mod generators;
pub mod mesh;
pub mod polygon;
pub mod region;
pub mod subdivide;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point2, Point3, Vector2, Vector3};

pub use error::{Error, Result};
pub use export::{write_obj, ObjWriter};
pub use generators::{generate, Generation};
pub use mesh::{Face, GeneratedMesh, MaterialBinding, Mesh, SubMesh, SubMeshCollection, TriangleMesh};
pub use region::{Footprint, Region, WallFace};
pub use triangulation::triangulate_polygon;
