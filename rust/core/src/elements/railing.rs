// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::shared::{RailConfig, RAIL};
use crate::error::Result;
use crate::field::FieldSpec;
use crate::record::{Record, RecordSchema};
use crate::value::MaterialId;

pub static RAILING: RecordSchema = RecordSchema {
    name: "railing",
    fields: &[
        FieldSpec::flag("closed", "Closed", true).describe("Join the last post back to the first"),
        FieldSpec::material("mat_post", "Post Material"),
        FieldSpec::material("mat_rail", "Rail Material"),
    ],
    children: &[("railing", &RAIL)],
};

#[derive(Debug, Clone, PartialEq)]
pub struct RailingConfig {
    pub rail: RailConfig,
    pub closed: bool,
    pub mat_post: Option<MaterialId>,
    pub mat_rail: Option<MaterialId>,
}

impl RailingConfig {
    pub fn resolve(record: &Record) -> Result<Self> {
        Ok(Self {
            rail: RailConfig::resolve(record.child("railing")?)?,
            closed: record.flag("closed")?,
            mat_post: record.material("mat_post")?,
            mat_rail: record.material("mat_rail")?,
        })
    }
}
