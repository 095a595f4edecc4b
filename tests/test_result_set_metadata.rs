//! Integration tests for result set metadata lookups.

use hive_jdbc_rs::{
    ColumnDescriptor, Error, MetadataFacet, Nullability, ResultSetMetadata, SqlTypeCode,
};
use std::sync::Arc;
use std::thread;

fn metadata(types: &[&str]) -> ResultSetMetadata {
    let columns = types
        .iter()
        .enumerate()
        .map(|(i, t)| ColumnDescriptor::new(format!("c{}", i + 1), *t))
        .collect();
    ResultSetMetadata::from_descriptors(columns)
}

#[test]
fn test_int_string_double_columns() {
    let meta = metadata(&["int", "string", "double"]);

    assert_eq!(meta.column_type(1).unwrap(), SqlTypeCode::Integer);
    assert_eq!(meta.column_type_name(1).unwrap(), "INT");
    assert!(meta.is_signed(1).unwrap());

    assert_eq!(meta.column_type(2).unwrap(), SqlTypeCode::Varchar);
    assert_eq!(meta.column_type_name(2).unwrap(), "STRING");
    assert!(!meta.is_signed(2).unwrap());

    assert_eq!(meta.column_type(3).unwrap(), SqlTypeCode::Double);
    assert!(meta.is_signed(3).unwrap());
}

#[test]
fn test_map_column_reads_as_string() {
    let meta = metadata(&["map<string,int>", "string"]);

    assert_eq!(meta.column_type(1).unwrap(), meta.column_type(2).unwrap());
    assert_eq!(meta.column_type_name(1).unwrap(), "STRING");
    assert_eq!(meta.column_type(1).unwrap(), SqlTypeCode::Varchar);
    assert!(!meta.is_signed(1).unwrap());
}

#[test]
fn test_unknown_type_is_reported() {
    let meta = metadata(&["unknowntype"]);

    let err = meta.column_type(1).unwrap_err();
    assert_eq!(
        err,
        Error::UnrecognizedType {
            raw_type: "unknowntype".to_string()
        }
    );
    assert!(matches!(
        meta.column_display_size(1),
        Err(Error::UnrecognizedType { .. })
    ));
    assert!(matches!(
        meta.is_signed(1),
        Err(Error::UnrecognizedType { .. })
    ));
}

#[test]
fn test_padded_type_is_reported() {
    let meta = metadata(&[" int", "int ", "\tbigint\n", "  map<string,int>"]);

    for column in 1..=meta.column_count() {
        let raw = meta.raw_type(column).unwrap().to_string();
        assert_eq!(
            meta.column_type(column),
            Err(Error::UnrecognizedType { raw_type: raw })
        );
    }
}

#[test]
fn test_i64_and_bigint_match() {
    let meta = metadata(&["i64", "bigint"]);

    for column in 1..=2 {
        assert_eq!(meta.column_type(column).unwrap(), SqlTypeCode::BigInt);
        assert_eq!(meta.column_type_name(column).unwrap(), "BIGINT");
        assert!(meta.is_signed(column).unwrap());
        assert_eq!(meta.precision(column).unwrap(), 19);
        assert_eq!(meta.column_display_size(column).unwrap(), 20);
    }
}

#[test]
fn test_column_bounds() {
    let meta = metadata(&["int", "string", "double", "boolean"]);
    let count = meta.column_count();

    assert!(meta.column_type(1).is_ok());
    assert!(meta.column_type(count).is_ok());
    assert_eq!(
        meta.column_type(0),
        Err(Error::InvalidColumn { column: 0, count })
    );
    assert_eq!(
        meta.column_type(count + 1),
        Err(Error::InvalidColumn {
            column: count + 1,
            count
        })
    );
    assert!(matches!(
        meta.column_name(0),
        Err(Error::InvalidColumn { .. })
    ));
    assert!(matches!(
        meta.precision(count + 1),
        Err(Error::InvalidColumn { .. })
    ));
}

#[test]
fn test_missing_type_list() {
    let meta = ResultSetMetadata::new(vec!["a".to_string(), "b".to_string()], None);

    assert_eq!(meta.column_count(), 2);
    assert_eq!(meta.column_type(1), Err(Error::MissingTypeInfo));
    assert_eq!(meta.column_type_name(2), Err(Error::MissingTypeInfo));
    assert_eq!(meta.scale(1), Err(Error::MissingTypeInfo));
    // missing types take precedence over bounds
    assert_eq!(meta.column_type(0), Err(Error::MissingTypeInfo));
}

#[test]
fn test_unsupported_facets() {
    let meta = metadata(&["int"]);

    assert_eq!(
        meta.catalog_name(1),
        Err(Error::Unsupported {
            facet: MetadataFacet::CatalogName
        })
    );
    assert_eq!(
        meta.schema_name(1).unwrap_err(),
        Error::unsupported(MetadataFacet::SchemaName)
    );
    assert_eq!(
        meta.table_name(1).unwrap_err(),
        Error::unsupported(MetadataFacet::TableName)
    );
    assert_eq!(
        meta.column_class_name(1).unwrap_err(),
        Error::unsupported(MetadataFacet::ColumnClassName)
    );
    for result in [
        meta.is_case_sensitive(1),
        meta.is_read_only(1),
        meta.is_writable(1),
        meta.is_definitely_writable(1),
        meta.is_searchable(1),
    ] {
        assert!(matches!(result, Err(Error::Unsupported { .. })));
    }
}

#[test]
fn test_fixed_answers() {
    let meta = metadata(&["int", "string"]);

    assert_eq!(meta.column_label(1).unwrap(), "c1");
    assert_eq!(meta.is_auto_increment(2), Ok(false));
    assert_eq!(meta.is_currency(2), Ok(false));
    assert_eq!(meta.is_nullable(2), Ok(Nullability::Nullable));
}

#[test]
fn test_sizing_per_column() {
    let meta = metadata(&[
        "boolean",
        "tinyint",
        "smallint",
        "float",
        "timestamp",
        "decimal(12,4)",
        "varchar(40)",
        "struct<a:int>",
    ]);

    assert_eq!(meta.column_display_size(1).unwrap(), 1);
    assert_eq!(meta.column_display_size(2).unwrap(), 4);
    assert_eq!(meta.column_display_size(3).unwrap(), 6);

    assert_eq!(meta.precision(4).unwrap(), 7);
    assert_eq!(meta.scale(4).unwrap(), 7);

    assert_eq!(meta.column_display_size(5).unwrap(), 29);
    assert_eq!(meta.scale(5).unwrap(), 9);

    assert_eq!(meta.column_type(6).unwrap(), SqlTypeCode::Decimal);
    assert_eq!(meta.precision(6).unwrap(), 12);
    assert_eq!(meta.scale(6).unwrap(), 4);
    assert_eq!(meta.column_display_size(6).unwrap(), 14);
    assert!(meta.is_signed(6).unwrap());

    assert_eq!(meta.column_type_name(7).unwrap(), "VARCHAR");
    assert_eq!(meta.precision(7).unwrap(), 40);

    assert_eq!(meta.precision(8).unwrap(), i32::MAX);
    assert_eq!(meta.scale(8).unwrap(), 0);
}

#[test]
fn test_shared_across_threads() {
    let meta = Arc::new(metadata(&["int", "array<int>", "i64", "double"]));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let meta = Arc::clone(&meta);
            thread::spawn(move || {
                (1..=meta.column_count())
                    .map(|c| meta.column_type(c).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            vec![
                SqlTypeCode::Integer,
                SqlTypeCode::Varchar,
                SqlTypeCode::BigInt,
                SqlTypeCode::Double
            ]
        );
    }
}
