//! Hive type string to SQL type translation.
//!
//! Scalar keywords are looked up case-insensitively in a static table.
//! Complex shapes (`map<..>`, `array<..>`, `struct<..>`) are matched by prefix
//! and reported as plain strings. Parameterized types such as `decimal(10,2)`
//! or `varchar(64)` keep their declared parameters so sizing can honor them.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::constants::{
    ARRAY_TYPE_PREFIX, BIGINT_TYPE_NAME, BOOLEAN_TYPE_NAME, CHAR_MAX_LENGTH, CHAR_TYPE_NAME,
    DECIMAL_MAX_PRECISION, DECIMAL_TYPE_NAME, DOUBLE_TYPE_NAME, FLOAT_TYPE_NAME, INT_TYPE_NAME,
    MAP_TYPE_PREFIX, SMALLINT_TYPE_NAME, STRING_TYPE_NAME, STRUCT_TYPE_PREFIX, TIMESTAMP_TYPE_NAME,
    TINYINT_TYPE_NAME, VARCHAR_MAX_LENGTH, VARCHAR_TYPE_NAME,
};
use crate::error::{Error, Result};
use crate::metadata::MetadataOptions;

use super::limits::ColumnLimits;
use super::sql_type::SqlTypeCode;

/// One row of the type lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeNameEntry {
    /// Lowercase Hive keyword.
    pub match_key: &'static str,
    /// SQL type code reported for the keyword.
    pub sql_type: SqlTypeCode,
    /// Canonical SQL type name reported for the keyword.
    pub type_name: &'static str,
}

const fn entry(
    match_key: &'static str,
    sql_type: SqlTypeCode,
    type_name: &'static str,
) -> TypeNameEntry {
    TypeNameEntry {
        match_key,
        sql_type,
        type_name,
    }
}

const STRING_ENTRY: TypeNameEntry = entry("string", SqlTypeCode::Varchar, STRING_TYPE_NAME);

/// Scalar keywords, including the Thrift-era aliases.
pub const SCALAR_TYPES: &[TypeNameEntry] = &[
    STRING_ENTRY,
    entry("float", SqlTypeCode::Float, FLOAT_TYPE_NAME),
    entry("double", SqlTypeCode::Double, DOUBLE_TYPE_NAME),
    entry("bool", SqlTypeCode::Boolean, BOOLEAN_TYPE_NAME),
    entry("boolean", SqlTypeCode::Boolean, BOOLEAN_TYPE_NAME),
    entry("byte", SqlTypeCode::TinyInt, TINYINT_TYPE_NAME),
    entry("tinyint", SqlTypeCode::TinyInt, TINYINT_TYPE_NAME),
    entry("smallint", SqlTypeCode::SmallInt, SMALLINT_TYPE_NAME),
    entry("i32", SqlTypeCode::Integer, INT_TYPE_NAME),
    entry("int", SqlTypeCode::Integer, INT_TYPE_NAME),
    entry("i64", SqlTypeCode::BigInt, BIGINT_TYPE_NAME),
    entry("bigint", SqlTypeCode::BigInt, BIGINT_TYPE_NAME),
    entry("timestamp", SqlTypeCode::Timestamp, TIMESTAMP_TYPE_NAME),
    entry("decimal", SqlTypeCode::Decimal, DECIMAL_TYPE_NAME),
];

/// Base names that accept a parenthesized parameter list.
pub const PARAMETERIZED_TYPES: &[TypeNameEntry] = &[
    entry("decimal", SqlTypeCode::Decimal, DECIMAL_TYPE_NAME),
    entry("varchar", SqlTypeCode::Varchar, VARCHAR_TYPE_NAME),
    entry("char", SqlTypeCode::Char, CHAR_TYPE_NAME),
];

/// Prefixes of nested types reported as opaque strings.
pub const COMPLEX_TYPE_PREFIXES: [&str; 3] =
    [MAP_TYPE_PREFIX, ARRAY_TYPE_PREFIX, STRUCT_TYPE_PREFIX];

static SCALAR_INDEX: Lazy<HashMap<&'static str, &'static TypeNameEntry>> =
    Lazy::new(|| SCALAR_TYPES.iter().map(|e| (e.match_key, e)).collect());

/// Parameters declared in a type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeParams {
    /// `char(n)` / `varchar(n)`
    Length(u32),
    /// `decimal(p,s)`; `decimal(p)` has scale 0.
    Decimal { precision: u32, scale: u32 },
}

/// A Hive column type resolved to its SQL representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiveType {
    /// SQL type code.
    pub sql_type: SqlTypeCode,
    /// Canonical SQL type name.
    pub type_name: &'static str,
    /// Declared parameters, if the type string carried any.
    pub params: Option<TypeParams>,
}

impl HiveType {
    fn from_entry(entry: &TypeNameEntry, params: Option<TypeParams>) -> Self {
        Self {
            sql_type: entry.sql_type,
            type_name: entry.type_name,
            params,
        }
    }

    /// Resolve a raw Hive type string with default options.
    pub fn parse(raw_type: &str) -> Result<Self> {
        Self::parse_with(raw_type, &MetadataOptions::default())
    }

    /// Resolve a raw Hive type string.
    ///
    /// Returns `Err(Error::UnrecognizedType)` when nothing matches, and
    /// `Err(Error::InvalidTypeParameters)` for a known parameterized type
    /// with a malformed parameter list.
    pub fn parse_with(raw_type: &str, options: &MetadataOptions) -> Result<Self> {
        // ASCII-only folding; "ſtring" and "İNT" stay unrecognized
        let key = raw_type.to_ascii_lowercase();

        if let Some(entry) = SCALAR_INDEX.get(key.as_str()) {
            return Ok(Self::from_entry(entry, None));
        }

        let prefix_subject = if options.case_sensitive_prefixes {
            raw_type
        } else {
            key.as_str()
        };
        if COMPLEX_TYPE_PREFIXES
            .iter()
            .any(|prefix| prefix_subject.starts_with(prefix))
        {
            return Ok(Self::from_entry(&STRING_ENTRY, None));
        }

        if options.parse_type_parameters {
            if let Some((base, args)) = split_parameters(&key) {
                if let Some(entry) = PARAMETERIZED_TYPES.iter().find(|e| e.match_key == base) {
                    let params = parse_parameters(entry.sql_type, args)
                        .map_err(|message| Error::invalid_parameters(raw_type, message))?;
                    return Ok(Self::from_entry(entry, Some(params)));
                }
            }
        }

        Err(Error::unrecognized(raw_type))
    }

    /// Sizing for this column type, honoring declared parameters.
    pub fn limits(&self) -> ColumnLimits {
        match self.params {
            Some(TypeParams::Length(len)) => {
                let len = clamp_i32(len);
                ColumnLimits {
                    display_size: len,
                    precision: len,
                    scale: 0,
                }
            }
            Some(TypeParams::Decimal { precision, scale }) => {
                let precision = clamp_i32(precision);
                let scale = clamp_i32(scale);
                // sign, plus the decimal point when there is a fraction
                let extra = if scale > 0 { 2 } else { 1 };
                ColumnLimits {
                    display_size: precision + extra,
                    precision,
                    scale,
                }
            }
            None => ColumnLimits::for_type(self.sql_type),
        }
    }

    /// Whether values of this type are signed numbers.
    pub fn is_signed(&self) -> bool {
        self.sql_type.is_signed()
    }
}

impl std::fmt::Display for HiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.params {
            Some(TypeParams::Length(len)) => write!(f, "{}({})", self.type_name, len),
            Some(TypeParams::Decimal { precision, scale }) => {
                write!(f, "{}({},{})", self.type_name, precision, scale)
            }
            None => f.write_str(self.type_name),
        }
    }
}

/// Map a raw Hive type string to its SQL type code.
pub fn map_to_sql_type(raw_type: &str) -> Result<SqlTypeCode> {
    HiveType::parse(raw_type).map(|t| t.sql_type)
}

/// Map a raw Hive type string to its canonical SQL type name.
pub fn map_to_sql_type_name(raw_type: &str) -> Result<&'static str> {
    HiveType::parse(raw_type).map(|t| t.type_name)
}

/// Split `base(args)` into its base name and argument text.
fn split_parameters(key: &str) -> Option<(&str, &str)> {
    let (base, rest) = key.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    Some((base.trim_end(), args))
}

fn parse_parameters(sql_type: SqlTypeCode, args: &str) -> std::result::Result<TypeParams, String> {
    let values = args
        .split(',')
        .map(|a| {
            let a = a.trim();
            a.parse::<u32>()
                .map_err(|_| format!("expected a non-negative integer, got '{}'", a))
        })
        .collect::<std::result::Result<Vec<u32>, String>>()?;

    match sql_type {
        SqlTypeCode::Decimal => {
            let (precision, scale) = match values.as_slice() {
                [p] => (*p, 0),
                [p, s] => (*p, *s),
                _ => return Err(format!("expected 1 or 2 parameters, got {}", values.len())),
            };
            if precision == 0 || precision > DECIMAL_MAX_PRECISION {
                return Err(format!(
                    "precision {} outside 1..={}",
                    precision, DECIMAL_MAX_PRECISION
                ));
            }
            if scale > precision {
                return Err(format!("scale {} exceeds precision {}", scale, precision));
            }
            Ok(TypeParams::Decimal { precision, scale })
        }
        _ => {
            let max = if sql_type == SqlTypeCode::Char {
                CHAR_MAX_LENGTH
            } else {
                VARCHAR_MAX_LENGTH
            };
            match values.as_slice() {
                [len] if (1..=max).contains(len) => Ok(TypeParams::Length(*len)),
                [len] => Err(format!("length {} outside 1..={}", len, max)),
                _ => Err(format!("expected 1 parameter, got {}", values.len())),
            }
        }
    }
}

fn clamp_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
