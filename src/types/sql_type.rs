//! Standard SQL type codes.
//!
//! The closed set of codes the Hive type mapper can produce, plus REAL for
//! completeness of the signedness contract.

use crate::constants::{
    SQL_TYPE_BIGINT, SQL_TYPE_BOOLEAN, SQL_TYPE_CHAR, SQL_TYPE_DECIMAL, SQL_TYPE_DOUBLE,
    SQL_TYPE_FLOAT, SQL_TYPE_INTEGER, SQL_TYPE_REAL, SQL_TYPE_SMALLINT, SQL_TYPE_TIMESTAMP,
    SQL_TYPE_TINYINT, SQL_TYPE_VARCHAR,
};

/// SQL type code aligned with the `java.sql.Types` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlTypeCode {
    /// Variable-length string. Also used for map/array/struct columns.
    Varchar,
    /// Fixed-length string.
    Char,
    Float,
    Double,
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Timestamp,
    Decimal,
    Real,
}

impl SqlTypeCode {
    /// Every code, in declaration order.
    pub const ALL: [SqlTypeCode; 12] = [
        SqlTypeCode::Varchar,
        SqlTypeCode::Char,
        SqlTypeCode::Float,
        SqlTypeCode::Double,
        SqlTypeCode::Boolean,
        SqlTypeCode::TinyInt,
        SqlTypeCode::SmallInt,
        SqlTypeCode::Integer,
        SqlTypeCode::BigInt,
        SqlTypeCode::Timestamp,
        SqlTypeCode::Decimal,
        SqlTypeCode::Real,
    ];

    /// Create from a raw `java.sql.Types` value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            SQL_TYPE_VARCHAR => Some(SqlTypeCode::Varchar),
            SQL_TYPE_CHAR => Some(SqlTypeCode::Char),
            SQL_TYPE_FLOAT => Some(SqlTypeCode::Float),
            SQL_TYPE_DOUBLE => Some(SqlTypeCode::Double),
            SQL_TYPE_BOOLEAN => Some(SqlTypeCode::Boolean),
            SQL_TYPE_TINYINT => Some(SqlTypeCode::TinyInt),
            SQL_TYPE_SMALLINT => Some(SqlTypeCode::SmallInt),
            SQL_TYPE_INTEGER => Some(SqlTypeCode::Integer),
            SQL_TYPE_BIGINT => Some(SqlTypeCode::BigInt),
            SQL_TYPE_TIMESTAMP => Some(SqlTypeCode::Timestamp),
            SQL_TYPE_DECIMAL => Some(SqlTypeCode::Decimal),
            SQL_TYPE_REAL => Some(SqlTypeCode::Real),
            _ => None,
        }
    }

    /// Get the `java.sql.Types` value.
    pub const fn code(&self) -> i32 {
        match self {
            SqlTypeCode::Varchar => SQL_TYPE_VARCHAR,
            SqlTypeCode::Char => SQL_TYPE_CHAR,
            SqlTypeCode::Float => SQL_TYPE_FLOAT,
            SqlTypeCode::Double => SQL_TYPE_DOUBLE,
            SqlTypeCode::Boolean => SQL_TYPE_BOOLEAN,
            SqlTypeCode::TinyInt => SQL_TYPE_TINYINT,
            SqlTypeCode::SmallInt => SQL_TYPE_SMALLINT,
            SqlTypeCode::Integer => SQL_TYPE_INTEGER,
            SqlTypeCode::BigInt => SQL_TYPE_BIGINT,
            SqlTypeCode::Timestamp => SQL_TYPE_TIMESTAMP,
            SqlTypeCode::Decimal => SQL_TYPE_DECIMAL,
            SqlTypeCode::Real => SQL_TYPE_REAL,
        }
    }

    /// Whether values of this type are signed numbers.
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            SqlTypeCode::Double
                | SqlTypeCode::Decimal
                | SqlTypeCode::Float
                | SqlTypeCode::Integer
                | SqlTypeCode::Real
                | SqlTypeCode::SmallInt
                | SqlTypeCode::TinyInt
                | SqlTypeCode::BigInt
        )
    }
}

impl std::fmt::Display for SqlTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SqlTypeCode::Varchar => "VARCHAR",
            SqlTypeCode::Char => "CHAR",
            SqlTypeCode::Float => "FLOAT",
            SqlTypeCode::Double => "DOUBLE",
            SqlTypeCode::Boolean => "BOOLEAN",
            SqlTypeCode::TinyInt => "TINYINT",
            SqlTypeCode::SmallInt => "SMALLINT",
            SqlTypeCode::Integer => "INTEGER",
            SqlTypeCode::BigInt => "BIGINT",
            SqlTypeCode::Timestamp => "TIMESTAMP",
            SqlTypeCode::Decimal => "DECIMAL",
            SqlTypeCode::Real => "REAL",
        };
        f.write_str(name)
    }
}

/// Whether values of the given type are signed numbers.
pub fn is_signed(code: SqlTypeCode) -> bool {
    code.is_signed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in SqlTypeCode::ALL {
            assert_eq!(SqlTypeCode::from_code(code.code()), Some(code));
        }
        assert_eq!(SqlTypeCode::from_code(2000), None);
    }

    #[test]
    fn test_java_sql_values() {
        assert_eq!(SqlTypeCode::Varchar.code(), 12);
        assert_eq!(SqlTypeCode::Integer.code(), 4);
        assert_eq!(SqlTypeCode::BigInt.code(), -5);
        assert_eq!(SqlTypeCode::TinyInt.code(), -6);
        assert_eq!(SqlTypeCode::Timestamp.code(), 93);
    }

    #[test]
    fn test_signed_numeric_codes() {
        let signed: Vec<_> = SqlTypeCode::ALL
            .into_iter()
            .filter(|c| is_signed(*c))
            .collect();
        assert_eq!(
            signed,
            vec![
                SqlTypeCode::Float,
                SqlTypeCode::Double,
                SqlTypeCode::TinyInt,
                SqlTypeCode::SmallInt,
                SqlTypeCode::Integer,
                SqlTypeCode::BigInt,
                SqlTypeCode::Decimal,
                SqlTypeCode::Real,
            ]
        );
        assert!(!is_signed(SqlTypeCode::Varchar));
        assert!(!is_signed(SqlTypeCode::Boolean));
        assert!(!is_signed(SqlTypeCode::Timestamp));
    }

    #[test]
    fn test_display() {
        assert_eq!(SqlTypeCode::Integer.to_string(), "INTEGER");
        assert_eq!(format!("{}", SqlTypeCode::Varchar), "VARCHAR");
    }
}
