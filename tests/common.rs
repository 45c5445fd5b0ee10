#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use productcodes::db::initialize::init_db;
use productcodes::models::ProductCode;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pcs() -> Command {
    cargo_bin_cmd!("productcodes")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_productcodes.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB through the CLI and add a small dataset
pub fn init_db_with_data(db_path: &str) {
    pcs()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (code, discount, description) in [
        ("HW", "M", "Hardware"),
        ("SW", "L", "Software"),
        ("FW", "N", "Firmware"),
    ] {
        pcs()
            .args(["--db", db_path, "add", code, discount, description])
            .assert()
            .success();
    }
}

/// Fresh in-memory database with the schema applied
pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

/// In-memory PRODUCT_CODE with no constraints, for storing malformed rows
pub fn loose_memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        "CREATE TABLE PRODUCT_CODE (Code TEXT, discountCode TEXT, Description TEXT);",
    )
    .expect("create loose table");
    conn
}

pub fn sample() -> Vec<ProductCode> {
    vec![
        ProductCode::new("HW", 'M', "Hardware"),
        ProductCode::new("SW", 'L', "Software"),
        ProductCode::new("FW", 'N', "Firmware"),
    ]
}

pub fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM PRODUCT_CODE", [], |r| r.get(0))
        .expect("count rows")
}

pub fn sorted_by_code(mut v: Vec<ProductCode>) -> Vec<ProductCode> {
    v.sort_by(|a, b| a.code().cmp(b.code()));
    v
}
