// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

const ROOF_TYPES: &[&str] = &["FLAT", "GABLE", "HIP"];

pub static ROOF: RecordSchema = RecordSchema {
    name: "roof",
    fields: &[
        FieldSpec::choice("type", "Type", ROOF_TYPES, 0),
        FieldSpec::real("thickness", "Thickness", 0.01, 10.0, 0.1),
        FieldSpec::real("outset", "Outset", 0.0, 10.0, 0.1).describe("Overhang beyond the footprint"),
        FieldSpec::real("height", "Height", 0.01, 100.0, 1.0).describe("Rise of the ridge or apex"),
        FieldSpec::material("mat_roof", "Roof Material"),
    ],
    children: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoofType {
    Flat,
    Gable,
    Hip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoofConfig {
    pub kind: RoofType,
    pub thickness: f64,
    pub outset: f64,
    pub height: f64,
    pub mat_roof: Option<MaterialId>,
}

impl RoofConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        let kind = match record.choice("type")? {
            "GABLE" => RoofType::Gable,
            "HIP" => RoofType::Hip,
            _ => RoofType::Flat,
        };
        Ok(Self {
            kind,
            thickness: record.real("thickness")?,
            outset: record.real("outset")?,
            height: record.real("height")?,
            mat_roof: record.material("mat_roof")?,
        })
    }
}
