use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::ProductCode;
use crate::ui::messages::warning;

/// Requested field changes; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct EditRequest {
    pub new_code: Option<String>,
    pub discount: Option<String>,
    pub description: Option<String>,
}

pub struct EditLogic;

impl EditLogic {
    /// Load the row keyed by `code`, apply `req` and write it back through
    /// the targeted UPDATE. Returns the stored record.
    pub fn apply(pool: &mut DbPool, code: &str, req: &EditRequest) -> AppResult<ProductCode> {
        let mut pc =
            queries::find(&pool.conn, code)?.ok_or_else(|| AppError::NotFound(code.to_string()))?;

        if let Some(new_code) = &req.new_code {
            let new_code = new_code.trim();
            if new_code.is_empty() {
                return Err(AppError::InvalidCode(new_code.to_string()));
            }
            pc.set_code(new_code);
        }
        if let Some(d) = &req.discount {
            pc.set_discount_code(ProductCode::parse_discount_code(d.trim())?);
        }
        if let Some(desc) = &req.description {
            pc.set_description(desc.as_str());
        }

        let changed = queries::update(&pool.conn, code, &pc)?;
        if changed == 0 {
            return Err(AppError::NotFound(code.to_string()));
        }

        if let Err(e) = ttlog(&pool.conn, "edit", code, &pc.to_string()) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(pc)
    }
}
