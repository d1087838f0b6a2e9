// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field declarations: kind, bounds, default, and write coercion.
//!
//! Numeric writes outside the declared range are clamped to the nearest
//! bound, never rejected. Everything else that does not fit the field is an
//! [`Error::InvalidValue`].

use crate::error::{Error, Result};
use crate::value::Value;

/// Declared kind of a field, including bounds and default
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Int { min: i64, max: i64, default: i64 },
    Real { min: f64, max: f64, default: f64 },
    Bool { default: bool },
    Enum {
        items: &'static [&'static str],
        default: usize,
    },
    Material,
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Int { .. } => "int",
            FieldKind::Real { .. } => "real",
            FieldKind::Bool { .. } => "bool",
            FieldKind::Enum { .. } => "enum",
            FieldKind::Material => "material",
        }
    }
}

/// Static description of one field, enumerable for UI construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    /// Written back by the generator; hosts should display it read-only.
    pub derived: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            description: "",
            kind,
            derived: false,
        }
    }

    pub const fn int(name: &'static str, label: &'static str, min: i64, max: i64, default: i64) -> Self {
        Self::new(name, label, FieldKind::Int { min, max, default })
    }

    pub const fn real(name: &'static str, label: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self::new(name, label, FieldKind::Real { min, max, default })
    }

    pub const fn flag(name: &'static str, label: &'static str, default: bool) -> Self {
        Self::new(name, label, FieldKind::Bool { default })
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        items: &'static [&'static str],
        default: usize,
    ) -> Self {
        Self::new(name, label, FieldKind::Enum { items, default })
    }

    pub const fn material(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Material)
    }

    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub const fn derived(mut self) -> Self {
        self.derived = true;
        self
    }

    /// Value a freshly created record holds for this field
    pub fn default_value(&self) -> Value {
        match self.kind {
            FieldKind::Int { default, .. } => Value::Int(default),
            FieldKind::Real { default, .. } => Value::Real(default),
            FieldKind::Bool { default } => Value::Bool(default),
            FieldKind::Enum { items, default } => {
                Value::Enum(items.get(default).copied().unwrap_or_default().to_string())
            }
            FieldKind::Material => Value::Material(None),
        }
    }

    /// Convert `value` into what this field stores.
    ///
    /// `path` is only used to label errors.
    pub fn coerce(&self, path: &str, value: Value) -> Result<Value> {
        match (self.kind, value) {
            (FieldKind::Int { .. } | FieldKind::Real { .. }, Value::Real(v)) if !v.is_finite() => {
                Err(Error::invalid(path, format!("{v} is not a finite number")))
            }
            (FieldKind::Int { min, max, .. }, Value::Int(v)) => Ok(Value::Int(v.clamp(min, max))),
            (FieldKind::Int { min, max, .. }, Value::Real(v)) => {
                // Saturating cast, then clamp into range
                Ok(Value::Int((v.round() as i64).clamp(min, max)))
            }
            (FieldKind::Real { min, max, .. }, Value::Real(v)) => Ok(Value::Real(v.clamp(min, max))),
            (FieldKind::Real { min, max, .. }, Value::Int(v)) => {
                Ok(Value::Real((v as f64).clamp(min, max)))
            }
            (FieldKind::Bool { .. }, Value::Bool(v)) => Ok(Value::Bool(v)),
            (FieldKind::Enum { items, .. }, Value::Enum(item)) => {
                if items.contains(&item.as_str()) {
                    Ok(Value::Enum(item))
                } else {
                    Err(Error::invalid(
                        path,
                        format!("`{item}` is not one of {}", items.join(", ")),
                    ))
                }
            }
            (FieldKind::Material, Value::Material(m)) => Ok(Value::Material(m)),
            (kind, other) => Err(Error::invalid(
                path,
                format!("expected {}, got {}", kind.type_name(), other.type_name()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::MaterialId;

    const FILL: &[&str] = &["BAR", "PANE"];

    #[test]
    fn real_values_are_clamped() {
        let spec = FieldSpec::real("ft", "Frame Thickness", 0.01, 100.0, 0.1);
        assert_eq!(spec.coerce("ft", Value::Real(250.0)), Ok(Value::Real(100.0)));
        assert_eq!(spec.coerce("ft", Value::Real(-1.0)), Ok(Value::Real(0.01)));
        assert_eq!(spec.coerce("ft", Value::Real(0.5)), Ok(Value::Real(0.5)));
        assert_eq!(spec.coerce("ft", Value::Int(3)), Ok(Value::Real(3.0)));
    }

    #[test]
    fn int_fields_round_reals() {
        let spec = FieldSpec::int("px", "Horizontal Panes", 0, 100, 1);
        assert_eq!(spec.coerce("px", Value::Real(2.6)), Ok(Value::Int(3)));
        assert_eq!(spec.coerce("px", Value::Int(-4)), Ok(Value::Int(0)));
        assert_eq!(spec.coerce("px", Value::Real(1e30)), Ok(Value::Int(100)));
    }

    #[test]
    fn non_finite_is_invalid() {
        let spec = FieldSpec::real("fd", "Frame Depth", 0.0, 100.0, 0.1);
        assert!(matches!(
            spec.coerce("fd", Value::Real(f64::NAN)),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn enum_items_are_validated() {
        let spec = FieldSpec::choice("fill", "Fill", FILL, 0);
        assert_eq!(spec.default_value(), Value::Enum("BAR".into()));
        assert!(spec.coerce("fill", Value::from("PANE")).is_ok());
        let err = spec.coerce("fill", Value::from("GRID")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for `fill`: `GRID` is not one of BAR, PANE"
        );
    }

    #[test]
    fn kind_mismatch_is_invalid() {
        let spec = FieldSpec::flag("adetail", "Arc Detail", false);
        assert!(spec.coerce("adetail", Value::Int(1)).is_err());

        let spec = FieldSpec::real("ft", "Frame Thickness", 0.01, 100.0, 0.1);
        assert!(spec.coerce("ft", Value::from("thick")).is_err());
        assert!(spec.coerce("ft", Value::from(MaterialId(3))).is_err());
    }

    #[test]
    fn builder_flags() {
        let spec = FieldSpec::real("total_height", "Total Height", 0.0, 1e6, 0.0)
            .describe("Height of all floors")
            .derived();
        assert!(spec.derived);
        assert_eq!(spec.description, "Height of all floors");
    }
}
