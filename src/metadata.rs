//! Result set metadata for Hive query results.
//!
//! `ResultSetMetadata` answers the standard SQL metadata questions for each
//! column (type code, type name, sizing, signedness) from the column names and
//! raw Hive type strings the server returns. Column ordinals are 1-based.

use once_cell::sync::OnceCell;

use crate::error::{Error, MetadataFacet, Result};
use crate::types::{ColumnDescriptor, HiveType, SqlTypeCode};

/// Options controlling how raw Hive types are translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataOptions {
    /// Match `map<`, `array<` and `struct<` only in lowercase (default: false).
    pub case_sensitive_prefixes: bool,
    /// Accept `decimal(p,s)`, `varchar(n)` and `char(n)` (default: true).
    pub parse_type_parameters: bool,
}

impl MetadataOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self {
            case_sensitive_prefixes: false,
            parse_type_parameters: true,
        }
    }

    /// Only recognize complex type prefixes written in lowercase.
    ///
    /// # Example
    ///
    /// ```
    /// use hive_jdbc_rs::{HiveType, MetadataOptions};
    ///
    /// let options = MetadataOptions::new().with_case_sensitive_prefixes(true);
    /// assert!(HiveType::parse_with("ARRAY<int>", &options).is_err());
    /// ```
    pub fn with_case_sensitive_prefixes(mut self, enabled: bool) -> Self {
        self.case_sensitive_prefixes = enabled;
        self
    }

    /// Enable or disable parsing of parenthesized type parameters.
    pub fn with_parse_type_parameters(mut self, enabled: bool) -> Self {
        self.parse_type_parameters = enabled;
        self
    }
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Nullability of a column, with the standard SQL metadata values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullability {
    NoNulls = 0,
    Nullable = 1,
    Unknown = 2,
}

/// Metadata for the columns of a Hive result set.
#[derive(Debug)]
pub struct ResultSetMetadata {
    column_names: Vec<String>,
    column_types: Option<Vec<String>>,
    /// Write-once resolution cache, one cell per type entry.
    resolved: Vec<OnceCell<HiveType>>,
    options: MetadataOptions,
}

impl ResultSetMetadata {
    /// Create metadata from column names and raw Hive types.
    ///
    /// `column_types` is `None` when the server did not send a schema; every
    /// type query then fails with `Error::MissingTypeInfo`. When present it
    /// must have one entry per name: type queries are bounded by the type
    /// list, name queries by the name list.
    pub fn new(column_names: Vec<String>, column_types: Option<Vec<String>>) -> Self {
        if let Some(types) = &column_types {
            debug_assert_eq!(
                types.len(),
                column_names.len(),
                "column names and types differ in length"
            );
        }
        let resolved = column_types
            .as_ref()
            .map(|types| types.iter().map(|_| OnceCell::new()).collect())
            .unwrap_or_default();
        Self {
            column_names,
            column_types,
            resolved,
            options: MetadataOptions::default(),
        }
    }

    /// Create metadata from column descriptors.
    pub fn from_descriptors(columns: Vec<ColumnDescriptor>) -> Self {
        let (names, types): (Vec<String>, Vec<String>) = columns
            .into_iter()
            .map(|c| (c.name, c.raw_type))
            .unzip();
        Self::new(names, Some(types))
    }

    /// Set translation options.
    pub fn with_options(mut self, options: MetadataOptions) -> Self {
        self.options = options;
        self.resolved = self.resolved.iter().map(|_| OnceCell::new()).collect();
        self
    }

    /// Get the translation options.
    pub fn options(&self) -> &MetadataOptions {
        &self.options
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_names.iter().map(String::as_str).collect()
    }

    /// Find a column ordinal by name (case-insensitive).
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.column_names
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .map(|idx| idx + 1)
    }

    /// Get the column name.
    pub fn column_name(&self, column: usize) -> Result<&str> {
        let idx = check_column(column, self.column_names.len())?;
        Ok(&self.column_names[idx])
    }

    /// Get the column label. Hive has no aliases distinct from names.
    pub fn column_label(&self, column: usize) -> Result<&str> {
        self.column_name(column)
    }

    /// Get the raw Hive type string of a column.
    pub fn raw_type(&self, column: usize) -> Result<&str> {
        let types = self.column_types.as_ref().ok_or(Error::MissingTypeInfo)?;
        let idx = check_column(column, types.len())?;
        Ok(&types[idx])
    }

    /// Get the resolved type of a column.
    ///
    /// Resolution happens on first access and is cached; failures are not.
    pub fn column(&self, column: usize) -> Result<&HiveType> {
        let raw_type = self.raw_type(column)?;
        self.resolved[column - 1].get_or_try_init(|| {
            match HiveType::parse_with(raw_type, &self.options) {
                Ok(t) => {
                    tracing::debug!(column, raw_type, sql_type = %t.sql_type, "resolved column type");
                    Ok(t)
                }
                Err(e) => {
                    tracing::warn!(column, raw_type, error = %e, "cannot translate column type");
                    Err(e)
                }
            }
        })
    }

    /// Get the SQL type code of a column.
    pub fn column_type(&self, column: usize) -> Result<SqlTypeCode> {
        Ok(self.column(column)?.sql_type)
    }

    /// Get the canonical SQL type name of a column.
    pub fn column_type_name(&self, column: usize) -> Result<&'static str> {
        Ok(self.column(column)?.type_name)
    }

    /// Get the maximum display width of a column.
    pub fn column_display_size(&self, column: usize) -> Result<i32> {
        Ok(self.column(column)?.limits().display_size)
    }

    /// Get the decimal precision (or maximum length) of a column.
    pub fn precision(&self, column: usize) -> Result<i32> {
        Ok(self.column(column)?.limits().precision)
    }

    /// Get the decimal scale of a column.
    pub fn scale(&self, column: usize) -> Result<i32> {
        Ok(self.column(column)?.limits().scale)
    }

    /// Check whether a column holds signed numbers.
    pub fn is_signed(&self, column: usize) -> Result<bool> {
        Ok(self.column(column)?.is_signed())
    }

    /// Hive has no auto-increment columns.
    pub fn is_auto_increment(&self, column: usize) -> Result<bool> {
        check_column(column, self.column_count())?;
        Ok(false)
    }

    /// Hive has no currency type.
    pub fn is_currency(&self, column: usize) -> Result<bool> {
        check_column(column, self.column_count())?;
        Ok(false)
    }

    /// Hive has no NOT NULL constraint, so every column is nullable.
    pub fn is_nullable(&self, column: usize) -> Result<Nullability> {
        check_column(column, self.column_count())?;
        Ok(Nullability::Nullable)
    }

    // Facets with no Hive equivalent

    /// Catalog names are not reported by Hive.
    pub fn catalog_name(&self, _column: usize) -> Result<&str> {
        Err(Error::unsupported(MetadataFacet::CatalogName))
    }

    /// Schema names are not reported by Hive.
    pub fn schema_name(&self, _column: usize) -> Result<&str> {
        Err(Error::unsupported(MetadataFacet::SchemaName))
    }

    /// Table names are not reported by Hive.
    pub fn table_name(&self, _column: usize) -> Result<&str> {
        Err(Error::unsupported(MetadataFacet::TableName))
    }

    /// Host-language value classes are not defined for Hive columns.
    pub fn column_class_name(&self, _column: usize) -> Result<&str> {
        Err(Error::unsupported(MetadataFacet::ColumnClassName))
    }

    /// Hive does not report column case sensitivity.
    pub fn is_case_sensitive(&self, _column: usize) -> Result<bool> {
        Err(Error::unsupported(MetadataFacet::CaseSensitive))
    }

    /// Hive does not report whether a column is read-only.
    pub fn is_read_only(&self, _column: usize) -> Result<bool> {
        Err(Error::unsupported(MetadataFacet::ReadOnly))
    }

    /// Hive does not report whether a column is writable.
    pub fn is_writable(&self, _column: usize) -> Result<bool> {
        Err(Error::unsupported(MetadataFacet::Writable))
    }

    /// Hive does not report whether a write to a column will succeed.
    pub fn is_definitely_writable(&self, _column: usize) -> Result<bool> {
        Err(Error::unsupported(MetadataFacet::DefinitelyWritable))
    }

    /// Hive does not report whether a column can appear in a WHERE clause.
    pub fn is_searchable(&self, _column: usize) -> Result<bool> {
        Err(Error::unsupported(MetadataFacet::Searchable))
    }
}

/// Validate a 1-based ordinal and return the 0-based index.
fn check_column(column: usize, count: usize) -> Result<usize> {
    if column < 1 || column > count {
        return Err(Error::InvalidColumn { column, count });
    }
    Ok(column - 1)
}
