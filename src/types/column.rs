//! Column descriptor as reported by the Hive server.

use crate::error::Result;
use crate::metadata::MetadataOptions;

use super::hive_type::HiveType;

/// A result set column: its name and raw Hive type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Raw Hive type, e.g. `int` or `map<string,string>`.
    pub raw_type: String,
}

impl ColumnDescriptor {
    /// Create a new column descriptor.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }

    /// Resolve the raw type to its SQL representation.
    pub fn resolve(&self, options: &MetadataOptions) -> Result<HiveType> {
        HiveType::parse_with(&self.raw_type, options)
    }
}
