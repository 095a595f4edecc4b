//! Display size, precision and scale per SQL type code.

use crate::constants::{
    DOUBLE_DIGITS, DOUBLE_DISPLAY_SIZE, FLOAT_DIGITS, FLOAT_DISPLAY_SIZE, TIMESTAMP_SCALE,
    TIMESTAMP_WIDTH, UNBOUNDED_SIZE,
};

use super::sql_type::SqlTypeCode;

/// Fixed sizing record for a column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLimits {
    /// Maximum width in characters of a rendered value.
    pub display_size: i32,
    /// Decimal precision, or maximum length for character types.
    pub precision: i32,
    /// Digits to the right of the decimal point.
    pub scale: i32,
}

impl ColumnLimits {
    const fn new(display_size: i32, precision: i32, scale: i32) -> Self {
        Self {
            display_size,
            precision,
            scale,
        }
    }

    /// Default limits for a type code, independent of declared parameters.
    pub const fn for_type(code: SqlTypeCode) -> Self {
        match code {
            // "true"/"false" render as a single logical digit
            SqlTypeCode::Boolean => Self::new(1, 1, 0),
            SqlTypeCode::Varchar | SqlTypeCode::Char => {
                Self::new(UNBOUNDED_SIZE, UNBOUNDED_SIZE, 0)
            }
            // integer widths leave room for the sign
            SqlTypeCode::TinyInt => Self::new(4, 3, 0),
            SqlTypeCode::SmallInt => Self::new(6, 5, 0),
            SqlTypeCode::Integer => Self::new(11, 10, 0),
            SqlTypeCode::BigInt => Self::new(20, 19, 0),
            SqlTypeCode::Float | SqlTypeCode::Real => {
                Self::new(FLOAT_DISPLAY_SIZE, FLOAT_DIGITS, FLOAT_DIGITS)
            }
            SqlTypeCode::Double => Self::new(DOUBLE_DISPLAY_SIZE, DOUBLE_DIGITS, DOUBLE_DIGITS),
            SqlTypeCode::Timestamp => Self::new(TIMESTAMP_WIDTH, TIMESTAMP_WIDTH, TIMESTAMP_SCALE),
            SqlTypeCode::Decimal => Self::new(UNBOUNDED_SIZE, UNBOUNDED_SIZE, UNBOUNDED_SIZE),
        }
    }
}

/// Default display size for a type code.
pub fn display_size(code: SqlTypeCode) -> i32 {
    ColumnLimits::for_type(code).display_size
}

/// Default precision for a type code.
pub fn precision(code: SqlTypeCode) -> i32 {
    ColumnLimits::for_type(code).precision
}

/// Default scale for a type code.
pub fn scale(code: SqlTypeCode) -> i32 {
    ColumnLimits::for_type(code).scale
}
