use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::ProductCode;

pub struct ListLogic;

impl ListLogic {
    /// All rows, optionally restricted to codes starting with `prefix`.
    /// Row order is whatever the table yields.
    pub fn load(pool: &DbPool, prefix: Option<&str>) -> AppResult<Vec<ProductCode>> {
        let mut rows = queries::all(&pool.conn)?;
        if let Some(p) = prefix {
            rows.retain(|pc| pc.code().starts_with(p));
        }
        Ok(rows)
    }
}
