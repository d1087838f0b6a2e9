// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor stack parameters

use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

pub static FLOORS: RecordSchema = RecordSchema {
    name: "floors",
    fields: &[
        FieldSpec::int("floor_count", "Floor Count", 1, 100, 1),
        FieldSpec::real("floor_height", "Floor Height", 0.1, 100.0, 2.5),
        FieldSpec::real("slab_thickness", "Slab Thickness", 0.01, 10.0, 0.2),
        FieldSpec::real("slab_outset", "Slab Outset", 0.0, 10.0, 0.1),
        FieldSpec::real("total_height", "Total Height", 0.0, 1.0e4, 0.0)
            .describe("Height of the whole stack, including slabs")
            .derived(),
        FieldSpec::material("mat_slab", "Slab Material"),
        FieldSpec::material("mat_wall", "Wall Material"),
    ],
    children: &[],
};

#[derive(Debug, Clone, PartialEq)]
pub struct FloorsConfig {
    pub floor_count: u32,
    pub floor_height: f64,
    pub slab_thickness: f64,
    pub slab_outset: f64,
    pub mat_slab: Option<MaterialId>,
    pub mat_wall: Option<MaterialId>,
}

impl FloorsConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            floor_count: record.int("floor_count")? as u32,
            floor_height: record.real("floor_height")?,
            slab_thickness: record.real("slab_thickness")?,
            slab_outset: record.real("slab_outset")?,
            mat_slab: record.material("mat_slab")?,
            mat_wall: record.material("mat_wall")?,
        })
    }

    /// Elevation of the top of the last slab
    pub fn total_height(&self) -> f64 {
        self.floor_count as f64 * (self.floor_height + self.slab_thickness)
    }
}
