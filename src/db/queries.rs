//! PRODUCT_CODE gateway: statement builders, row hydration and the
//! persistence operations (`all`, `save`, …) run against a caller-owned store.
//!
//! Nothing here opens, caches or closes a connection. Every statement is a
//! local value and is released as soon as the function that prepared it
//! returns, whether it returns `Ok` or `Err`.

use crate::db::store::{RowSource, Statement, Store};
use crate::errors::{AppError, AppResult};
use crate::models::ProductCode;
use rusqlite::types::{ToSql, Type};
use rusqlite::{Connection, TransactionBehavior, params};

pub const TABLE: &str = "PRODUCT_CODE";

pub const COL_CODE: &str = "Code";
pub const COL_DISCOUNT_CODE: &str = "discountCode";
pub const COL_DESCRIPTION: &str = "Description";

pub const SELECT_ALL_SQL: &str = "SELECT * FROM PRODUCT_CODE";
pub const SELECT_BY_CODE_SQL: &str = "SELECT * FROM PRODUCT_CODE WHERE code = ?1";
pub const EXISTS_SQL: &str = "SELECT 1 FROM PRODUCT_CODE WHERE code = ?1";
pub const INSERT_SQL: &str =
    "INSERT INTO PRODUCT_CODE (code, discountCode, description) VALUES (?1, ?2, ?3)";
pub const UPDATE_SQL: &str =
    "UPDATE PRODUCT_CODE SET code = ?1, discountCode = ?2, description = ?3 WHERE code = ?4";
pub const DELETE_SQL: &str = "DELETE FROM PRODUCT_CODE WHERE code = ?1";
pub const COUNT_SQL: &str = "SELECT COUNT(*) AS total FROM PRODUCT_CODE";

/// Which branch `save` took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Updated,
}

impl SaveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveOutcome::Inserted => "insert",
            SaveOutcome::Updated => "update",
        }
    }
}

// ---------------------------
// Statement builders
// ---------------------------

/// Prepared `SELECT *` over the whole table.
pub fn select_all_query<S: Store>(store: &S) -> AppResult<S::Statement<'_>> {
    store.prepare(SELECT_ALL_SQL)
}

/// Prepared insert; binds `?1 = code, ?2 = discountCode, ?3 = description`.
pub fn insert_query<S: Store>(store: &S) -> AppResult<S::Statement<'_>> {
    store.prepare(INSERT_SQL)
}

/// Prepared targeted update; binds the three new values, then `?4` = the
/// code of the row to change.
pub fn update_query<S: Store>(store: &S) -> AppResult<S::Statement<'_>> {
    store.prepare(UPDATE_SQL)
}

/// Prepared existence probe keyed on `code`.
pub fn exists_query<S: Store>(store: &S) -> AppResult<S::Statement<'_>> {
    store.prepare(EXISTS_SQL)
}

// ---------------------------
// Hydration
// ---------------------------

/// Build a record from the row the cursor currently points at.
///
/// Missing columns, NULLs and malformed discount codes come back as
/// [`AppError::Db`]; a half-filled record is never returned.
pub fn hydrate(row: &dyn RowSource) -> AppResult<ProductCode> {
    let code = row.text(COL_CODE)?;

    let discount_str = row.text(COL_DISCOUNT_CODE)?;
    let discount_code = match ProductCode::parse_discount_code(&discount_str) {
        Ok(c) => c,
        Err(e) => return Err(conversion_failure(row.column_index(COL_DISCOUNT_CODE)?, e)),
    };

    let description = row.text(COL_DESCRIPTION)?;

    Ok(ProductCode::new(code, discount_code, description))
}

/// Wrap a value-level failure the way rusqlite reports a bad column.
fn conversion_failure(idx: usize, err: AppError) -> AppError {
    AppError::Db(rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        Box::new(err),
    ))
}

/// Run `stmt` and hydrate every row it yields, in cursor order.
pub fn convert<St>(stmt: &mut St, params: &[&dyn ToSql]) -> AppResult<Vec<ProductCode>>
where
    St: Statement + ?Sized,
{
    let mut out = Vec::new();
    stmt.for_each_row(params, &mut |row| {
        out.push(hydrate(row)?);
        Ok(())
    })?;
    Ok(out)
}

// ---------------------------
// Operations
// ---------------------------

/// Every row of PRODUCT_CODE, in the store's natural order.
pub fn all<S: Store>(store: &S) -> AppResult<Vec<ProductCode>> {
    let mut stmt = select_all_query(store)?;
    convert(&mut stmt, params![])
}

/// Single row by business key.
pub fn find<S: Store>(store: &S, code: &str) -> AppResult<Option<ProductCode>> {
    let mut stmt = store.prepare(SELECT_BY_CODE_SQL)?;
    let mut rows = convert(&mut stmt, params![code])?;
    if rows.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rows.swap_remove(0)))
    }
}

pub fn exists<S: Store>(store: &S, code: &str) -> AppResult<bool> {
    let mut stmt = exists_query(store)?;
    stmt.exists(params![code])
}

pub fn insert<S: Store>(store: &S, pc: &ProductCode) -> AppResult<()> {
    let mut stmt = insert_query(store)?;
    stmt.execute(params![pc.code(), pc.discount_code_str(), pc.description()])?;
    Ok(())
}

/// Overwrite the row whose code is `original_code` with `pc`.
/// `pc.code()` may differ from `original_code` (rename).
pub fn update<S: Store>(store: &S, original_code: &str, pc: &ProductCode) -> AppResult<usize> {
    let mut stmt = update_query(store)?;
    stmt.execute(params![
        pc.code(),
        pc.discount_code_str(),
        pc.description(),
        original_code
    ])
}

/// Upsert keyed on `pc.code()`: one existence probe, then exactly one
/// INSERT or UPDATE. No transaction is opened; see [`save_in_transaction`].
pub fn save<S: Store>(store: &S, pc: &ProductCode) -> AppResult<SaveOutcome> {
    if exists(store, pc.code())? {
        update(store, pc.code(), pc)?;
        Ok(SaveOutcome::Updated)
    } else {
        insert(store, pc)?;
        Ok(SaveOutcome::Inserted)
    }
}

/// [`save`] with the probe and the write inside one IMMEDIATE transaction,
/// so two writers racing on the same code cannot both insert.
pub fn save_in_transaction(conn: &mut Connection, pc: &ProductCode) -> AppResult<SaveOutcome> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let outcome = save(&*tx, pc)?;
    tx.commit()?;
    Ok(outcome)
}

pub fn delete<S: Store>(store: &S, code: &str) -> AppResult<usize> {
    let mut stmt = store.prepare(DELETE_SQL)?;
    stmt.execute(params![code])
}

pub fn count<S: Store>(store: &S) -> AppResult<i64> {
    let mut stmt = store.prepare(COUNT_SQL)?;
    let mut total = 0;
    stmt.for_each_row(params![], &mut |row| {
        total = row.integer("total")?;
        Ok(())
    })?;
    Ok(total)
}
