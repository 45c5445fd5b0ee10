use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{self, SaveOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::ProductCode;
use crate::ui::messages::warning;

pub struct AddLogic;

impl AddLogic {
    /// Build a record from raw CLI input, rejecting an empty code or a
    /// discount code that is not exactly one character.
    pub fn parse(code: &str, discount: &str, description: &str) -> AppResult<ProductCode> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::InvalidCode(code.to_string()));
        }
        let discount_code = ProductCode::parse_discount_code(discount.trim())?;
        Ok(ProductCode::new(code, discount_code, description))
    }

    /// Upsert `pc` and record the outcome in the audit log.
    pub fn apply(pool: &mut DbPool, pc: &ProductCode, atomic: bool) -> AppResult<SaveOutcome> {
        let outcome = if atomic {
            pool.with_conn(|conn| queries::save_in_transaction(conn, pc))?
        } else {
            queries::save(&pool.conn, pc)?
        };

        if let Err(e) = ttlog(&pool.conn, outcome.as_str(), pc.code(), &pc.to_string()) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(outcome)
    }
}
