//! Hive result set metadata for Rust
//!
//! Translates the loosely typed column descriptors returned by a Hive server
//! (type names such as `int`, `decimal(10,2)` or `map<string,int>`) into
//! standard SQL metadata: type code, canonical type name, display size,
//! precision, scale and signedness.
//!
//! # Example
//!
//! ```
//! use hive_jdbc_rs::{ResultSetMetadata, Result, SqlTypeCode};
//!
//! fn main() -> Result<()> {
//!     let meta = ResultSetMetadata::new(
//!         vec!["id".to_string(), "attrs".to_string()],
//!         Some(vec!["i64".to_string(), "map<string,string>".to_string()]),
//!     );
//!
//!     assert_eq!(meta.column_type(1)?, SqlTypeCode::BigInt);
//!     assert_eq!(meta.column_type_name(1)?, "BIGINT");
//!     assert!(meta.is_signed(1)?);
//!
//!     // nested types are surfaced as strings
//!     assert_eq!(meta.column_type_name(2)?, "STRING");
//!     assert_eq!(meta.column_display_size(2)?, i32::MAX);
//!
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod metadata;
pub mod types;

// Re-export main types
pub use error::{Error, MetadataFacet, Result};
pub use metadata::{MetadataOptions, Nullability, ResultSetMetadata};
pub use types::{
    display_size, is_signed, map_to_sql_type, map_to_sql_type_name, precision, scale,
    ColumnDescriptor, ColumnLimits, HiveType, SqlTypeCode, TypeParams,
};
