// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Straight stair run parameters

use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

pub static STAIRS: RecordSchema = RecordSchema {
    name: "stairs",
    fields: &[
        FieldSpec::int("step_count", "Step Count", 1, 100, 10),
        FieldSpec::real("total_rise", "Total Rise", 0.1, 100.0, 2.5),
        FieldSpec::real("total_run", "Total Run", 0.1, 100.0, 3.0),
        FieldSpec::real("width", "Width", 0.1, 100.0, 1.0),
        FieldSpec::real("step_height", "Step Height", 0.0, 100.0, 0.0).derived(),
        FieldSpec::real("step_depth", "Step Depth", 0.0, 100.0, 0.0).derived(),
        FieldSpec::material("mat_step", "Step Material"),
    ],
    children: &[],
};

#[derive(Debug, Clone, PartialEq)]
pub struct StairsConfig {
    pub step_count: u32,
    pub total_rise: f64,
    pub total_run: f64,
    pub width: f64,
    pub mat_step: Option<MaterialId>,
}

impl StairsConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            step_count: record.int("step_count")? as u32,
            total_rise: record.real("total_rise")?,
            total_run: record.real("total_run")?,
            width: record.real("width")?,
            mat_step: record.material("mat_step")?,
        })
    }

    pub fn step_height(&self) -> f64 {
        self.total_rise / self.step_count.max(1) as f64
    }

    pub fn step_depth(&self) -> f64 {
        self.total_run / self.step_count.max(1) as f64
    }
}
