// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Element kinds, their record schemas, and typed configuration snapshots.
//!
//! Each element module declares a static [`RecordSchema`] and a plain struct
//! resolved from a [`Record`](crate::Record) of that schema. Generators only
//! ever see the resolved struct.

pub mod balcony;
pub mod door;
pub mod floorplan;
pub mod floors;
pub mod railing;
pub mod roof;
pub mod shared;
pub mod stairs;
pub mod window;

use std::fmt;
use std::str::FromStr;

use crate::record::RecordSchema;

pub use balcony::BalconyConfig;
pub use door::DoorConfig;
pub use floorplan::{FloorplanConfig, FloorplanType};
pub use floors::FloorsConfig;
pub use railing::RailingConfig;
pub use roof::{RoofConfig, RoofType};
pub use shared::{ArchConfig, RailConfig, SplitConfig, TopShape};
pub use stairs::StairsConfig;
pub use window::{FillType, WindowConfig};

/// Kind tag of a generated element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Floorplan,
    Floors,
    Window,
    Door,
    Balcony,
    Railing,
    Stairs,
    Roof,
}

impl ElementKind {
    pub const ALL: [ElementKind; 8] = [
        ElementKind::Floorplan,
        ElementKind::Floors,
        ElementKind::Window,
        ElementKind::Door,
        ElementKind::Balcony,
        ElementKind::Railing,
        ElementKind::Stairs,
        ElementKind::Roof,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Floorplan => "FLOORPLAN",
            ElementKind::Floors => "FLOOR",
            ElementKind::Window => "WINDOW",
            ElementKind::Door => "DOOR",
            ElementKind::Balcony => "BALCONY",
            ElementKind::Railing => "RAILING",
            ElementKind::Stairs => "STAIRS",
            ElementKind::Roof => "ROOF",
        }
    }

    /// Name given to a new registry entry of this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Floorplan => "Floorplan",
            ElementKind::Floors => "Floors",
            ElementKind::Window => "Window",
            ElementKind::Door => "Door",
            ElementKind::Balcony => "Balcony",
            ElementKind::Railing => "Railing",
            ElementKind::Stairs => "Stairs",
            ElementKind::Roof => "Roof",
        }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            ElementKind::Floorplan => &floorplan::FLOORPLAN,
            ElementKind::Floors => &floors::FLOORS,
            ElementKind::Window => &window::WINDOW,
            ElementKind::Door => &door::DOOR,
            ElementKind::Balcony => &balcony::BALCONY,
            ElementKind::Railing => &railing::RAILING,
            ElementKind::Stairs => &stairs::STAIRS,
            ElementKind::Roof => &roof::ROOF,
        }
    }

    /// At most one element of this kind exists per host object.
    pub fn is_singleton(&self) -> bool {
        matches!(self, ElementKind::Floorplan | ElementKind::Floors)
    }

    /// Kinds whose configuration feeds this kind's placement
    pub fn dependencies(&self) -> &'static [ElementKind] {
        match self {
            ElementKind::Floors => &[ElementKind::Floorplan],
            ElementKind::Roof => &[ElementKind::Floorplan, ElementKind::Floors],
            _ => &[],
        }
    }

    /// Whether an edit to `other` requires regenerating this kind
    pub fn depends_on(&self, other: ElementKind) -> bool {
        self.dependencies().contains(&other)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::InvalidValue {
                path: "kind".to_string(),
                reason: format!("unknown element kind `{s}`"),
            })
    }
}
