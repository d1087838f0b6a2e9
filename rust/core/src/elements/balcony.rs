// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::shared::{RailConfig, RAIL};
use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

pub static BALCONY: RecordSchema = RecordSchema {
    name: "balcony",
    fields: &[
        FieldSpec::real("width", "Width", 0.1, 100.0, 1.5),
        FieldSpec::real("depth", "Depth", 0.1, 100.0, 1.0).describe("How far the slab projects from the wall"),
        FieldSpec::real("slab_thickness", "Slab Thickness", 0.01, 10.0, 0.15),
        FieldSpec::material("mat_slab", "Slab Material"),
        FieldSpec::material("mat_railing", "Railing Material"),
    ],
    children: &[("railing", &RAIL)],
};

#[derive(Debug, Clone, PartialEq)]
pub struct BalconyConfig {
    pub width: f64,
    pub depth: f64,
    pub slab_thickness: f64,
    pub rail: RailConfig,
    pub mat_slab: Option<MaterialId>,
    pub mat_railing: Option<MaterialId>,
}

impl BalconyConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            width: record.real("width")?,
            depth: record.real("depth")?,
            slab_thickness: record.real("slab_thickness")?,
            rail: RailConfig::resolve(record.child("railing")?)?,
            mat_slab: record.material("mat_slab")?,
            mat_railing: record.material("mat_railing")?,
        })
    }
}
