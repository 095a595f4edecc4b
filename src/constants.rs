//! SQL type constants and Hive type names.
//!
//! Type codes match the `java.sql.Types` values so generic SQL tooling can
//! consume them without another translation step.

// SQL type codes
pub const SQL_TYPE_CHAR: i32 = 1;
pub const SQL_TYPE_DECIMAL: i32 = 3;
pub const SQL_TYPE_INTEGER: i32 = 4;
pub const SQL_TYPE_SMALLINT: i32 = 5;
pub const SQL_TYPE_FLOAT: i32 = 6;
pub const SQL_TYPE_REAL: i32 = 7;
pub const SQL_TYPE_DOUBLE: i32 = 8;
pub const SQL_TYPE_VARCHAR: i32 = 12;
pub const SQL_TYPE_BOOLEAN: i32 = 16;
pub const SQL_TYPE_TIMESTAMP: i32 = 93;
pub const SQL_TYPE_BIGINT: i32 = -5;
pub const SQL_TYPE_TINYINT: i32 = -6;

// Canonical type names reported for columns
pub const STRING_TYPE_NAME: &str = "STRING";
pub const VARCHAR_TYPE_NAME: &str = "VARCHAR";
pub const CHAR_TYPE_NAME: &str = "CHAR";
pub const FLOAT_TYPE_NAME: &str = "FLOAT";
pub const DOUBLE_TYPE_NAME: &str = "DOUBLE";
pub const BOOLEAN_TYPE_NAME: &str = "BOOLEAN";
pub const TINYINT_TYPE_NAME: &str = "TINYINT";
pub const SMALLINT_TYPE_NAME: &str = "SMALLINT";
pub const INT_TYPE_NAME: &str = "INT";
pub const BIGINT_TYPE_NAME: &str = "BIGINT";
pub const TIMESTAMP_TYPE_NAME: &str = "TIMESTAMP";
pub const DECIMAL_TYPE_NAME: &str = "DECIMAL";

// Complex type prefixes, surfaced as opaque strings
pub const MAP_TYPE_PREFIX: &str = "map<";
pub const ARRAY_TYPE_PREFIX: &str = "array<";
pub const STRUCT_TYPE_PREFIX: &str = "struct<";

// Sizing
/// Hive strings have no maximum length.
pub const UNBOUNDED_SIZE: i32 = i32::MAX;
/// `yyyy-mm-dd hh:mm:ss.fffffffff`
pub const TIMESTAMP_WIDTH: i32 = 29;
/// Fractional-second digits of a Hive timestamp.
pub const TIMESTAMP_SCALE: i32 = 9;
/// Significant decimal digits of an IEEE-754 single.
pub const FLOAT_DIGITS: i32 = 7;
/// Significant decimal digits of an IEEE-754 double.
pub const DOUBLE_DIGITS: i32 = 15;
/// e.g. `-(17#).e-###`
pub const FLOAT_DISPLAY_SIZE: i32 = 24;
/// e.g. `-(17#).e-####`
pub const DOUBLE_DISPLAY_SIZE: i32 = 25;
/// Largest precision accepted in `decimal(p,s)`.
pub const DECIMAL_MAX_PRECISION: u32 = 38;
/// Longest `varchar(n)` Hive accepts.
pub const VARCHAR_MAX_LENGTH: u32 = 65535;
/// Longest `char(n)` Hive accepts.
pub const CHAR_MAX_LENGTH: u32 = 255;
