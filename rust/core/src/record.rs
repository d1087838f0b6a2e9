// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration records: a fixed-shape tree of fields addressed by path.
//!
//! A [`RecordSchema`] is the static shape shared by every element of a kind;
//! a [`Record`] holds one element's values in schema order. Fields gated by
//! a toggle or selector are always present, so their values survive while
//! they are inactive.

use crate::error::{Error, Result};
use crate::field::FieldSpec;
use crate::path::{split_path, FieldPath};
use crate::value::{MaterialId, Value};

/// Static shape of a record: its leaf fields and named sub-records
#[derive(Debug, PartialEq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    pub children: &'static [(&'static str, &'static RecordSchema)],
}

impl RecordSchema {
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn child_index(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|(n, _)| *n == name)
    }

    /// Every leaf field with its full path, depth first in declaration order
    pub fn catalog(&'static self) -> Vec<(FieldPath, &'static FieldSpec)> {
        let mut out = Vec::new();
        self.collect_catalog(&FieldPath::new(""), &mut out);
        out
    }

    fn collect_catalog(&'static self, prefix: &FieldPath, out: &mut Vec<(FieldPath, &'static FieldSpec)>) {
        for spec in self.fields {
            out.push((prefix.join(spec.name), spec));
        }
        for (name, child) in self.children {
            child.collect_catalog(&prefix.join(name), out);
        }
    }
}

/// Outcome of a single field write
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub previous: Value,
    pub current: Value,
}

impl Assignment {
    /// Whether the stored value actually changed
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// One element's configuration values
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: &'static RecordSchema,
    values: Vec<Value>,
    children: Vec<Record>,
}

impl Record {
    /// Create a record holding every field's default
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            values: schema.fields.iter().map(FieldSpec::default_value).collect(),
            children: schema.children.iter().map(|(_, s)| Record::new(s)).collect(),
        }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// Named sub-record
    pub fn child(&self, name: &str) -> Result<&Record> {
        self.schema
            .child_index(name)
            .map(|i| &self.children[i])
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    fn locate(&self, path: &str) -> Result<(&Record, usize)> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        let (parents, leaf) = split_path(path);
        let mut record = self;
        for segment in parents {
            let index = record
                .schema
                .child_index(segment)
                .ok_or_else(|| Error::UnknownField(path.to_string()))?;
            record = &record.children[index];
        }
        let index = record
            .schema
            .field_index(leaf)
            .ok_or_else(|| Error::UnknownField(path.to_string()))?;
        Ok((record, index))
    }

    fn locate_mut(&mut self, path: &str) -> Result<(&mut Record, usize)> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        let (parents, leaf) = split_path(path);
        let mut record = self;
        for segment in parents {
            let index = record
                .schema
                .child_index(segment)
                .ok_or_else(|| Error::UnknownField(path.to_string()))?;
            record = &mut record.children[index];
        }
        let index = record
            .schema
            .field_index(leaf)
            .ok_or_else(|| Error::UnknownField(path.to_string()))?;
        Ok((record, index))
    }

    /// Declaration of the field at `path`
    pub fn spec(&self, path: &str) -> Result<&'static FieldSpec> {
        let (record, index) = self.locate(path)?;
        Ok(&record.schema.fields[index])
    }

    pub fn get(&self, path: &str) -> Result<Value> {
        self.value(path).cloned()
    }

    fn value(&self, path: &str) -> Result<&Value> {
        let (record, index) = self.locate(path)?;
        Ok(&record.values[index])
    }

    /// Store `value` at `path`, returning the previous value.
    ///
    /// Numeric values are clamped into range; on error nothing is stored.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<Value> {
        self.assign(path, value).map(|a| a.previous)
    }

    /// Like [`Record::set`] but reports both the old and the stored value.
    pub fn assign(&mut self, path: &str, value: impl Into<Value>) -> Result<Assignment> {
        let (record, index) = self.locate_mut(path)?;
        let coerced = record.schema.fields[index].coerce(path, value.into())?;
        let previous = std::mem::replace(&mut record.values[index], coerced.clone());
        Ok(Assignment {
            previous,
            current: coerced,
        })
    }

    /// Restore every field, including nested ones, to its default
    pub fn reset(&mut self) {
        *self = Record::new(self.schema);
    }

    pub fn int(&self, path: &str) -> Result<i64> {
        match self.value(path)? {
            Value::Int(v) => Ok(*v),
            other => Err(mismatch(path, "int", other)),
        }
    }

    pub fn real(&self, path: &str) -> Result<f64> {
        match self.value(path)? {
            Value::Real(v) => Ok(*v),
            other => Err(mismatch(path, "real", other)),
        }
    }

    pub fn flag(&self, path: &str) -> Result<bool> {
        match self.value(path)? {
            Value::Bool(v) => Ok(*v),
            other => Err(mismatch(path, "bool", other)),
        }
    }

    pub fn choice(&self, path: &str) -> Result<&str> {
        match self.value(path)? {
            Value::Enum(v) => Ok(v),
            other => Err(mismatch(path, "enum", other)),
        }
    }

    pub fn material(&self, path: &str) -> Result<Option<MaterialId>> {
        match self.value(path)? {
            Value::Material(v) => Ok(*v),
            other => Err(mismatch(path, "material", other)),
        }
    }

    /// Count of leaf fields, nested ones included
    pub fn field_count(&self) -> usize {
        self.values.len() + self.children.iter().map(Record::field_count).sum::<usize>()
    }
}

fn mismatch(path: &str, expected: &str, found: &Value) -> Error {
    Error::invalid(path, format!("expected {expected}, found {}", found.type_name()))
}
