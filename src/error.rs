//! Error types for Hive result-set metadata.

use std::fmt;
use thiserror::Error;

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for metadata translation and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raw Hive type string matches no known type.
    #[error("Unrecognized column type: {raw_type}")]
    UnrecognizedType { raw_type: String },

    /// Known base type with malformed parameters, e.g. `decimal(10,x)`.
    #[error("Invalid parameters for column type {raw_type}: {message}")]
    InvalidTypeParameters { raw_type: String, message: String },

    /// Column ordinal outside `1..=count`.
    #[error("Invalid column value: {column} (columns: {count})")]
    InvalidColumn { column: usize, count: usize },

    /// The result set carries no column type list.
    #[error("Could not determine column type name for ResultSet")]
    MissingTypeInfo,

    /// Metadata facet that Hive has no equivalent for.
    #[error("Method not supported: {facet}")]
    Unsupported { facet: MetadataFacet },
}

impl Error {
    /// Create an unrecognized type error.
    pub fn unrecognized(raw_type: impl Into<String>) -> Self {
        Self::UnrecognizedType {
            raw_type: raw_type.into(),
        }
    }

    /// Create an invalid type parameters error.
    pub fn invalid_parameters(raw_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTypeParameters {
            raw_type: raw_type.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported facet error.
    pub fn unsupported(facet: MetadataFacet) -> Self {
        Self::Unsupported { facet }
    }
}

/// Metadata facets that never have an answer for Hive columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataFacet {
    CatalogName,
    SchemaName,
    TableName,
    ColumnClassName,
    CaseSensitive,
    ReadOnly,
    Writable,
    DefinitelyWritable,
    Searchable,
}

impl MetadataFacet {
    /// Name of the facet as exposed by SQL metadata APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataFacet::CatalogName => "catalogName",
            MetadataFacet::SchemaName => "schemaName",
            MetadataFacet::TableName => "tableName",
            MetadataFacet::ColumnClassName => "columnClassName",
            MetadataFacet::CaseSensitive => "caseSensitive",
            MetadataFacet::ReadOnly => "readOnly",
            MetadataFacet::Writable => "writable",
            MetadataFacet::DefinitelyWritable => "definitelyWritable",
            MetadataFacet::Searchable => "searchable",
        }
    }
}

impl fmt::Display for MetadataFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::unrecognized("uniontype<int>").to_string(),
            "Unrecognized column type: uniontype<int>"
        );
        assert_eq!(
            Error::InvalidColumn { column: 0, count: 3 }.to_string(),
            "Invalid column value: 0 (columns: 3)"
        );
        assert_eq!(
            Error::unsupported(MetadataFacet::TableName).to_string(),
            "Method not supported: tableName"
        );
    }
}
