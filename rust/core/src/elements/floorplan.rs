// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan parameters: the ground outline every floor is extruded from

use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

const FLOORPLAN_TYPES: &[&str] = &["RECTANGULAR", "CIRCULAR"];

pub static FLOORPLAN: RecordSchema = RecordSchema {
    name: "floorplan",
    fields: &[
        FieldSpec::choice("type", "Type", FLOORPLAN_TYPES, 0),
        FieldSpec::real("width", "Width", 0.1, 1000.0, 4.0),
        FieldSpec::real("length", "Length", 0.1, 1000.0, 4.0),
        FieldSpec::real("radius", "Radius", 0.1, 1000.0, 2.0),
        FieldSpec::int("segments", "Segments", 3, 256, 32).describe("Segments of a circular outline"),
        FieldSpec::material("mat_floor", "Floor Material"),
    ],
    children: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorplanType {
    Rectangular,
    Circular,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloorplanConfig {
    pub kind: FloorplanType,
    pub width: f64,
    pub length: f64,
    pub radius: f64,
    pub segments: u32,
    pub mat_floor: Option<MaterialId>,
}

impl FloorplanConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        let kind = match record.choice("type")? {
            "CIRCULAR" => FloorplanType::Circular,
            _ => FloorplanType::Rectangular,
        };
        Ok(Self {
            kind,
            width: record.real("width")?,
            length: record.real("length")?,
            radius: record.real("radius")?,
            segments: record.int("segments")? as u32,
            mat_floor: record.material("mat_floor")?,
        })
    }
}
