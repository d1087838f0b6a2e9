// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Window parameters

use super::shared::{ArchConfig, SplitConfig, TopShape, ARCH, SPLIT, TOP_SHAPES};
use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

const FILL_TYPES: &[&str] = &["BAR", "PANE"];

pub static WINDOW: RecordSchema = RecordSchema {
    name: "window",
    fields: &[
        FieldSpec::choice("type", "Type", TOP_SHAPES, 0).describe("Type of window"),
        FieldSpec::choice("fill", "Fill", FILL_TYPES, 0).describe("Type of fill for window"),
        FieldSpec::real("frame_thickness", "Frame Thickness", 0.01, 100.0, 0.1)
            .describe("Thickness of window frame"),
        FieldSpec::real("frame_depth", "Frame Depth", 0.0, 100.0, 0.1)
            .describe("Depth of window frame"),
        FieldSpec::int("horizontal_panes", "Horizontal Panes", 0, 100, 1)
            .describe("Number of horizontal dividers"),
        FieldSpec::int("vertical_panes", "Vertical Panes", 0, 100, 1)
            .describe("Number of vertical dividers"),
        FieldSpec::real("pane_thickness", "Pane Frame Thickness", 0.01, 100.0, 0.1)
            .describe("Thickness of window pane frame or bar"),
        FieldSpec::real("pane_depth", "Pane Frame Depth", 0.01, 100.0, 0.01)
            .describe("Depth of window pane frame"),
        FieldSpec::flag("apply_split", "Add Split", true)
            .describe("Whether to split the window glass"),
        FieldSpec::material("mat_frame", "Frame Material"),
        FieldSpec::material("mat_bar", "Bar Material"),
        FieldSpec::material("mat_pane", "Pane Material"),
        FieldSpec::material("mat_glass", "Glass Material"),
    ],
    children: &[("arch", &ARCH), ("split", &SPLIT)],
};

/// How the glass area is divided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillType {
    /// Thin square bars
    Bar,
    /// Pane frames with their own depth
    Pane,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub top: TopShape,
    pub fill: FillType,
    pub frame_thickness: f64,
    pub frame_depth: f64,
    pub horizontal_panes: u32,
    pub vertical_panes: u32,
    pub pane_thickness: f64,
    pub pane_depth: f64,
    pub arch: ArchConfig,
    pub apply_split: bool,
    pub split: SplitConfig,
    pub mat_frame: Option<MaterialId>,
    pub mat_bar: Option<MaterialId>,
    pub mat_pane: Option<MaterialId>,
    pub mat_glass: Option<MaterialId>,
}

impl WindowConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        let fill = match record.choice("fill")? {
            "PANE" => FillType::Pane,
            _ => FillType::Bar,
        };
        Ok(Self {
            top: TopShape::resolve(record, "type")?,
            fill,
            frame_thickness: record.real("frame_thickness")?,
            frame_depth: record.real("frame_depth")?,
            horizontal_panes: record.int("horizontal_panes")? as u32,
            vertical_panes: record.int("vertical_panes")? as u32,
            pane_thickness: record.real("pane_thickness")?,
            pane_depth: record.real("pane_depth")?,
            arch: ArchConfig::resolve(record.child("arch")?)?,
            apply_split: record.flag("apply_split")?,
            split: SplitConfig::resolve(record.child("split")?)?,
            mat_frame: record.material("mat_frame")?,
            mat_bar: record.material("mat_bar")?,
            mat_pane: record.material("mat_pane")?,
            mat_glass: record.material("mat_glass")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::Error;

    #[test]
    fn defaults_match_the_field_catalog() {
        let config = WindowConfig::resolve(&Record::new(&WINDOW)).unwrap();
        assert_eq!(config.top, TopShape::Basic);
        assert_eq!(config.fill, FillType::Bar);
        assert_eq!(config.horizontal_panes, 1);
        assert_eq!(config.arch.resolution, 5);
        assert!(config.apply_split);
        assert!(!config.split.is_identity());
        assert_eq!(config.mat_glass, None);
    }

    #[test]
    fn arch_fields_survive_type_toggles() {
        let mut record = Record::new(&WINDOW);
        record.set("type", "ARCHED").unwrap();
        record.set("arch.resolution", 12).unwrap();
        record.set("arch.detail", true).unwrap();
        record.set("type", "BASIC").unwrap();
        record.set("type", "ARCHED").unwrap();

        let config = WindowConfig::resolve(&record).unwrap();
        assert_eq!(config.arch.resolution, 12);
        assert!(config.arch.detail);
    }

    #[test]
    fn out_of_range_writes_clamp_and_bad_fill_fails() {
        let mut record = Record::new(&WINDOW);
        record.set("horizontal_panes", 500).unwrap();
        assert_eq!(record.get("horizontal_panes").unwrap(), Value::Int(100));
        record.set("arch.offset", 0.0).unwrap();
        assert_eq!(record.get("arch.offset").unwrap(), Value::Real(0.01));

        assert!(matches!(
            record.set("fill", "GRID"),
            Err(Error::InvalidValue { .. })
        ));
        assert_eq!(record.choice("fill").unwrap(), "BAR");
    }

    #[test]
    fn catalog_exposes_nested_paths() {
        let catalog = WINDOW.catalog();
        assert!(catalog.iter().any(|(p, _)| p.as_str() == "arch.detail_depth"));
        assert!(catalog.iter().any(|(p, _)| p.as_str() == "split.offset_y"));
        assert_eq!(catalog.len(), 13 + 6 + 4);
    }
}
