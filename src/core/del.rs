use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, code: &str) -> AppResult<()> {
        let deleted = queries::delete(&pool.conn, code)?;
        if deleted == 0 {
            return Err(AppError::NotFound(code.to_string()));
        }

        if let Err(e) = ttlog(&pool.conn, "del", code, &format!("Deleted product code {code}")) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(())
    }
}
