use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring the database schema up to date.
///
/// Tables are only ever created by the migration engine; the gateway assumes
/// PRODUCT_CODE already exists.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    let applied = run_pending_migrations(conn)?;
    if applied > 0 {
        conn.execute_batch("PRAGMA optimize;")?;
    }
    Ok(())
}
