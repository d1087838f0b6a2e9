// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for engine operations.

use crate::keys::{ElementId, HostKey};

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing or regenerating elements.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("host not found: {0:?}")]
    HostNotFound(HostKey),

    /// A registry operation referenced an entry that does not exist.
    #[error("element not found: {0}")]
    NotFound(ElementId),

    /// A field write was rejected; the stored value is unchanged.
    #[error(transparent)]
    Config(#[from] cynthia_core::Error),

    /// Regeneration failed; the element keeps its previous mesh.
    #[error("generation failed: {0}")]
    Generation(#[from] cynthia_geometry::Error),
}
