//! Hive column types and their SQL translation.

mod column;
mod hive_type;
mod limits;
mod sql_type;

pub use column::ColumnDescriptor;
pub use hive_type::{
    map_to_sql_type, map_to_sql_type_name, HiveType, TypeNameEntry, TypeParams,
    COMPLEX_TYPE_PREFIXES, PARAMETERIZED_TYPES, SCALAR_TYPES,
};
pub use limits::{display_size, precision, scale, ColumnLimits};
pub use sql_type::{is_signed, SqlTypeCode};
