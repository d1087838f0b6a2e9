// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use cynthia_core::ElementKind;
use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a mesh.
///
/// Any of these leaves the element's previous mesh in place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Degenerate placement region: {0}")]
    DegenerateRegion(String),

    #[error("Degenerate opening: {0}")]
    DegenerateOpening(String),

    #[error("{kind} elements need a {expected} region")]
    RegionMismatch {
        kind: ElementKind,
        expected: &'static str,
    },

    #[error("Triangulation failed: {0}")]
    TriangulationError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] cynthia_core::Error),
}
