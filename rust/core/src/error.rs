// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The value does not fit the field's kind, or names an enumeration
    /// item the field does not declare. The field is left unchanged.
    #[error("invalid value for `{path}`: {reason}")]
    InvalidValue { path: String, reason: String },

    #[error("unknown field: `{0}`")]
    UnknownField(String),

    #[error("field path is empty")]
    EmptyPath,
}

impl Error {
    pub(crate) fn invalid(path: &str, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
