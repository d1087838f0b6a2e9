// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sub-records composed into several element kinds

use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};

pub(crate) const TOP_SHAPES: &[&str] = &["BASIC", "ARCHED"];

/// Arch parameters; only read when the owner's `type` is `ARCHED`.
pub static ARCH: RecordSchema = RecordSchema {
    name: "arch",
    fields: &[
        FieldSpec::int("resolution", "Arc Resolution", 0, 1000, 5)
            .describe("Number of segments for the arc"),
        FieldSpec::real("offset", "Arc Offset", 0.01, 1.0, 0.5)
            .describe("How far the arc starts below the top, as a fraction of the height"),
        FieldSpec::real("height", "Arc Height", 0.01, 100.0, 0.5)
            .describe("Radius of the arc above its springing line"),
        FieldSpec::flag("detail", "Arc Detail", false).describe("Whether to add detail to the arc"),
        FieldSpec::real("detail_thickness", "Arc Detail Size", 0.01, 100.0, 0.02)
            .describe("Size of arc details"),
        FieldSpec::real("detail_depth", "Arc Detail Depth", 0.01, 100.0, 0.02)
            .describe("Depth of arc details"),
    ],
    children: &[],
};

/// Grid subdivision applied to an element's outward faces
pub static SPLIT: RecordSchema = RecordSchema {
    name: "split",
    fields: &[
        FieldSpec::int("horizontal_cuts", "Horizontal Cuts", 0, 100, 1),
        FieldSpec::int("vertical_cuts", "Vertical Cuts", 0, 100, 1),
        FieldSpec::real("offset_x", "Offset X", -0.5, 0.5, 0.0)
            .describe("Shift of every vertical cut, as a fraction of the cut spacing"),
        FieldSpec::real("offset_y", "Offset Y", -0.5, 0.5, 0.0)
            .describe("Shift of every horizontal cut, as a fraction of the cut spacing"),
    ],
    children: &[],
};

/// Posts and top rail shared by railings and balconies
pub static RAIL: RecordSchema = RecordSchema {
    name: "railing",
    fields: &[
        FieldSpec::real("post_size", "Post Size", 0.01, 10.0, 0.05),
        FieldSpec::real("post_height", "Post Height", 0.1, 10.0, 0.9),
        FieldSpec::real("post_spacing", "Post Spacing", 0.05, 100.0, 0.5)
            .describe("Maximum distance between neighbouring posts"),
        FieldSpec::real("rail_size", "Rail Size", 0.01, 10.0, 0.05),
    ],
    children: &[],
};

/// Top edge of an opening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopShape {
    Basic,
    Arched,
}

impl TopShape {
    pub(crate) fn resolve(record: &Record, path: &str) -> Result<Self> {
        Ok(match record.choice(path)? {
            "ARCHED" => TopShape::Arched,
            _ => TopShape::Basic,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchConfig {
    pub resolution: u32,
    pub offset: f64,
    pub height: f64,
    pub detail: bool,
    pub detail_thickness: f64,
    pub detail_depth: f64,
}

impl ArchConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            resolution: record.int("resolution")? as u32,
            offset: record.real("offset")?,
            height: record.real("height")?,
            detail: record.flag("detail")?,
            detail_thickness: record.real("detail_thickness")?,
            detail_depth: record.real("detail_depth")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    pub horizontal_cuts: u32,
    pub vertical_cuts: u32,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl SplitConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            horizontal_cuts: record.int("horizontal_cuts")? as u32,
            vertical_cuts: record.int("vertical_cuts")? as u32,
            offset_x: record.real("offset_x")?,
            offset_y: record.real("offset_y")?,
        })
    }

    /// No cuts in either direction
    pub fn is_identity(&self) -> bool {
        self.horizontal_cuts == 0 && self.vertical_cuts == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailConfig {
    pub post_size: f64,
    pub post_height: f64,
    pub post_spacing: f64,
    pub rail_size: f64,
}

impl RailConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            post_size: record.real("post_size")?,
            post_height: record.real("post_height")?,
            post_spacing: record.real("post_spacing")?,
            rail_size: record.real("rail_size")?,
        })
    }
}
