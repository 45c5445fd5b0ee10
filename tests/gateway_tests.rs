use productcodes::db::queries::{self, SaveOutcome};
use productcodes::errors::AppError;
use productcodes::models::ProductCode;
use rusqlite::params;

mod common;
use common::{loose_memory_db, memory_db, row_count, sample, sorted_by_code};

#[test]
fn test_all_on_empty_table() {
    let conn = memory_db();
    let rows = queries::all(&conn).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_all_returns_every_row() {
    let conn = memory_db();
    for (code, d, desc) in [("HW", "M", "Hardware"), ("SW", "L", "Software"), ("FW", "N", "Firmware")] {
        conn.execute(
            "INSERT INTO PRODUCT_CODE (Code, discountCode, Description) VALUES (?1, ?2, ?3)",
            params![code, d, desc],
        )
        .unwrap();
    }

    let rows = sorted_by_code(queries::all(&conn).unwrap());
    assert_eq!(rows.len(), 3);

    let expected = sorted_by_code(sample());
    for (got, want) in rows.iter().zip(&expected) {
        assert_eq!(got.code(), want.code());
        assert_eq!(got.discount_code(), want.discount_code());
        assert_eq!(got.description(), want.description());
    }
}

#[test]
fn test_save_new_code_inserts_one_row() {
    let conn = memory_db();
    let pc = ProductCode::new("SW", 'L', "Software");

    assert_eq!(queries::save(&conn, &pc).unwrap(), SaveOutcome::Inserted);

    let rows = queries::all(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].code(), "SW");
    assert_eq!(rows[0].discount_code(), 'L');
    assert_eq!(rows[0].description(), "Software");
}

#[test]
fn test_save_existing_code_updates_in_place() {
    let conn = memory_db();
    for pc in sample() {
        queries::save(&conn, &pc).unwrap();
    }
    assert_eq!(row_count(&conn), 3);

    let changed = ProductCode::new("SW", 'H', "Software suites");
    assert_eq!(queries::save(&conn, &changed).unwrap(), SaveOutcome::Updated);
    assert_eq!(row_count(&conn), 3);

    let rows = sorted_by_code(queries::all(&conn).unwrap());
    let sw = rows.iter().find(|p| p.code() == "SW").unwrap();
    assert_eq!(sw.discount_code(), 'H');
    assert_eq!(sw.description(), "Software suites");

    // Other rows untouched
    let hw = rows.iter().find(|p| p.code() == "HW").unwrap();
    assert_eq!(hw.discount_code(), 'M');
    assert_eq!(hw.description(), "Hardware");
    let fw = rows.iter().find(|p| p.code() == "FW").unwrap();
    assert_eq!(fw.discount_code(), 'N');
    assert_eq!(fw.description(), "Firmware");
}

#[test]
fn test_save_then_all_round_trip() {
    let conn = memory_db();
    let saved = vec![
        ProductCode::new("A1", 'x', "with 'quotes' and ?"),
        ProductCode::new("B2", 'ж', "unicode описание"),
        ProductCode::new("C3", ' ', ""),
    ];
    for pc in &saved {
        queries::save(&conn, pc).unwrap();
    }

    let fetched = queries::all(&conn).unwrap();
    for pc in &saved {
        let f = fetched.iter().find(|p| p.code() == pc.code()).unwrap();
        assert_eq!(f.discount_code(), pc.discount_code());
        assert_eq!(f.description(), pc.description());
    }
}

#[test]
fn test_insert_binds_values_not_placeholders() {
    let conn = memory_db();
    {
        let mut stmt = queries::insert_query(&conn).unwrap();
        stmt.execute(params!["PL", "P", "Plastics"]).unwrap();
    }

    let stored: (String, String, String) = conn
        .query_row("SELECT Code, discountCode, Description FROM PRODUCT_CODE", [], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?))
        })
        .unwrap();
    assert_eq!(stored, ("PL".into(), "P".into(), "Plastics".into()));
}

#[test]
fn test_update_query_targets_single_row() {
    let conn = memory_db();
    for pc in sample() {
        queries::insert(&conn, &pc).unwrap();
    }

    {
        let mut stmt = queries::update_query(&conn).unwrap();
        let n = stmt.execute(params!["FW", "Z", "Firmware v2", "FW"]).unwrap();
        assert_eq!(n, 1);
    }

    let hw = queries::find(&conn, "HW").unwrap().unwrap();
    assert_eq!(hw.discount_code(), 'M');
    let fw = queries::find(&conn, "FW").unwrap().unwrap();
    assert_eq!(fw.discount_code(), 'Z');
    assert_eq!(fw.description(), "Firmware v2");
}

#[test]
fn test_select_all_query_and_convert() {
    let conn = memory_db();
    for pc in sample() {
        queries::insert(&conn, &pc).unwrap();
    }

    let mut stmt = queries::select_all_query(&conn).unwrap();
    let rows = queries::convert(&mut stmt, params![]).unwrap();
    assert_eq!(rows.len(), 3);

    // The same prepared statement can be run again.
    let again = queries::convert(&mut stmt, params![]).unwrap();
    assert_eq!(sorted_by_code(rows), sorted_by_code(again));
}

#[test]
fn test_update_can_rename() {
    let conn = memory_db();
    queries::insert(&conn, &ProductCode::new("OLD", 'A', "Legacy")).unwrap();

    let renamed = ProductCode::new("NEW", 'A', "Legacy");
    assert_eq!(queries::update(&conn, "OLD", &renamed).unwrap(), 1);

    assert!(queries::find(&conn, "OLD").unwrap().is_none());
    assert_eq!(queries::find(&conn, "NEW").unwrap().unwrap(), renamed);
}

#[test]
fn test_update_missing_code_affects_nothing() {
    let conn = memory_db();
    queries::insert(&conn, &ProductCode::new("HW", 'M', "Hardware")).unwrap();

    let n = queries::update(&conn, "XX", &ProductCode::new("XX", 'Q', "Nope")).unwrap();
    assert_eq!(n, 0);
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn test_find_exists_delete_count() {
    let conn = memory_db();
    for pc in sample() {
        queries::save(&conn, &pc).unwrap();
    }

    assert!(queries::exists(&conn, "HW").unwrap());
    assert!(!queries::exists(&conn, "ZZ").unwrap());
    assert!(queries::find(&conn, "ZZ").unwrap().is_none());
    assert_eq!(queries::count(&conn).unwrap(), 3);

    assert_eq!(queries::delete(&conn, "HW").unwrap(), 1);
    assert_eq!(queries::delete(&conn, "HW").unwrap(), 0);
    assert_eq!(queries::count(&conn).unwrap(), 2);
}

#[test]
fn test_save_in_transaction() {
    let mut conn = memory_db();

    let pc = ProductCode::new("TX", 'T', "Transactional");
    assert_eq!(
        queries::save_in_transaction(&mut conn, &pc).unwrap(),
        SaveOutcome::Inserted
    );

    let pc2 = ProductCode::new("TX", 'U', "Transactional v2");
    assert_eq!(
        queries::save_in_transaction(&mut conn, &pc2).unwrap(),
        SaveOutcome::Updated
    );

    assert_eq!(row_count(&conn), 1);
    let stored = queries::find(&conn, "TX").unwrap().unwrap();
    assert_eq!(stored.discount_code(), 'U');
    assert!(conn.is_autocommit(), "transaction must be closed");
}

#[test]
fn test_save_without_table_is_storage_error() {
    let conn = memory_db();
    conn.execute_batch("DROP TABLE PRODUCT_CODE;").unwrap();

    let err = queries::save(&conn, &ProductCode::new("HW", 'M', "Hardware")).unwrap_err();
    assert!(err.is_storage(), "got {err:?}");
}

#[test]
fn test_all_fails_on_null_description() {
    let conn = loose_memory_db();
    conn.execute_batch(
        "INSERT INTO PRODUCT_CODE VALUES ('HW', 'M', 'Hardware');
         INSERT INTO PRODUCT_CODE VALUES ('XX', 'Q', NULL);",
    )
    .unwrap();

    let err = queries::all(&conn).unwrap_err();
    assert!(err.is_storage(), "got {err:?}");
}

#[test]
fn test_all_fails_on_empty_discount_code() {
    let conn = loose_memory_db();
    conn.execute_batch("INSERT INTO PRODUCT_CODE VALUES ('HW', '', 'Hardware');")
        .unwrap();

    match queries::all(&conn) {
        Err(AppError::Db(rusqlite::Error::FromSqlConversionFailure(idx, _, inner))) => {
            assert_eq!(idx, 1, "discountCode is the second column");
            assert!(inner.to_string().contains("Invalid discount code"));
        }
        other => panic!("expected conversion failure, got {other:?}"),
    }
}

#[test]
fn test_conversion_failure_follows_column_position() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE PRODUCT_CODE (Description TEXT, Code TEXT, discountCode TEXT);
         INSERT INTO PRODUCT_CODE VALUES ('Hardware', 'HW', 'MX');",
    )
    .unwrap();

    match queries::find(&conn, "HW") {
        Err(AppError::Db(rusqlite::Error::FromSqlConversionFailure(idx, _, _))) => {
            assert_eq!(idx, 2);
        }
        other => panic!("expected conversion failure, got {other:?}"),
    }
}

#[test]
fn test_all_fails_on_missing_column() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE PRODUCT_CODE (Code TEXT, discountCode TEXT);
         INSERT INTO PRODUCT_CODE VALUES ('HW', 'M');",
    )
    .unwrap();

    let err = queries::all(&conn).unwrap_err();
    assert!(err.is_storage(), "got {err:?}");
}
