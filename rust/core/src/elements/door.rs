// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door parameters

use super::shared::{ArchConfig, SplitConfig, TopShape, ARCH, SPLIT, TOP_SHAPES};
use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

pub static DOOR: RecordSchema = RecordSchema {
    name: "door",
    fields: &[
        FieldSpec::choice("type", "Type", TOP_SHAPES, 0).describe("Type of door"),
        FieldSpec::real("frame_thickness", "Frame Thickness", 0.01, 100.0, 0.1),
        FieldSpec::real("frame_depth", "Frame Depth", 0.0, 100.0, 0.1),
        FieldSpec::real("door_depth", "Door Depth", 0.01, 100.0, 0.05)
            .describe("How far the door leaf sits behind the wall face"),
        FieldSpec::int("panel_count", "Panels", 0, 20, 2),
        FieldSpec::real("panel_margin", "Panel Margin", 0.01, 100.0, 0.1),
        FieldSpec::real("panel_depth", "Panel Depth", 0.01, 100.0, 0.02),
        FieldSpec::flag("apply_split", "Add Split", false),
        FieldSpec::material("mat_frame", "Frame Material"),
        FieldSpec::material("mat_door", "Door Material"),
        FieldSpec::material("mat_panel", "Panel Material"),
    ],
    children: &[("arch", &ARCH), ("split", &SPLIT)],
};

#[derive(Debug, Clone, PartialEq)]
pub struct DoorConfig {
    pub top: TopShape,
    pub frame_thickness: f64,
    pub frame_depth: f64,
    pub door_depth: f64,
    pub panel_count: u32,
    pub panel_margin: f64,
    pub panel_depth: f64,
    pub arch: ArchConfig,
    pub apply_split: bool,
    pub split: SplitConfig,
    pub mat_frame: Option<MaterialId>,
    pub mat_door: Option<MaterialId>,
    pub mat_panel: Option<MaterialId>,
}

impl DoorConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            top: TopShape::resolve(record, "type")?,
            frame_thickness: record.real("frame_thickness")?,
            frame_depth: record.real("frame_depth")?,
            door_depth: record.real("door_depth")?,
            panel_count: record.int("panel_count")? as u32,
            panel_margin: record.real("panel_margin")?,
            panel_depth: record.real("panel_depth")?,
            arch: ArchConfig::resolve(record.child("arch")?)?,
            apply_split: record.flag("apply_split")?,
            split: SplitConfig::resolve(record.child("split")?)?,
            mat_frame: record.material("mat_frame")?,
            mat_door: record.material("mat_door")?,
            mat_panel: record.material("mat_panel")?,
        })
    }
}
