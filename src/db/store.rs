//! Store abstraction used by the PRODUCT_CODE gateway.
//!
//! The gateway only needs three things from a connection: prepare a
//! statement, run it, and walk the rows it yields. `rusqlite::Connection`
//! implements this directly; tests plug in doubles that count statements.
//!
//! Statements are owned values: dropping one releases it, and a cursor opened
//! by [`Statement::for_each_row`] never outlives the call.

use crate::errors::AppResult;
use rusqlite::types::ToSql;
use rusqlite::{Connection, Row};

/// A handle able to prepare statements. The caller owns its lifecycle.
pub trait Store {
    type Statement<'conn>: Statement
    where
        Self: 'conn;

    fn prepare(&self, sql: &str) -> AppResult<Self::Statement<'_>>;
}

/// A prepared statement bound with positional parameters.
pub trait Statement {
    /// Run the query and report whether it yields at least one row.
    fn exists(&mut self, params: &[&dyn ToSql]) -> AppResult<bool>;

    /// Run a write statement; returns the number of affected rows.
    fn execute(&mut self, params: &[&dyn ToSql]) -> AppResult<usize>;

    /// Run the query and hand every row to `f`, in cursor order.
    /// The first error (from the store or from `f`) stops the walk.
    fn for_each_row(
        &mut self,
        params: &[&dyn ToSql],
        f: &mut dyn FnMut(&dyn RowSource) -> AppResult<()>,
    ) -> AppResult<()>;
}

/// Read access to the current row of a cursor, by column name.
pub trait RowSource {
    /// Non-NULL text value of `column`.
    fn text(&self, column: &str) -> AppResult<String>;

    /// Non-NULL integer value of `column`.
    fn integer(&self, column: &str) -> AppResult<i64>;

    /// Position of `column` in the result set.
    fn column_index(&self, column: &str) -> AppResult<usize>;
}

impl Store for Connection {
    type Statement<'conn> = rusqlite::Statement<'conn>;

    fn prepare(&self, sql: &str) -> AppResult<rusqlite::Statement<'_>> {
        Ok(Connection::prepare(self, sql)?)
    }
}

impl Statement for rusqlite::Statement<'_> {
    fn exists(&mut self, params: &[&dyn ToSql]) -> AppResult<bool> {
        Ok(rusqlite::Statement::exists(self, params)?)
    }

    fn execute(&mut self, params: &[&dyn ToSql]) -> AppResult<usize> {
        Ok(rusqlite::Statement::execute(self, params)?)
    }

    fn for_each_row(
        &mut self,
        params: &[&dyn ToSql],
        f: &mut dyn FnMut(&dyn RowSource) -> AppResult<()>,
    ) -> AppResult<()> {
        // `rows` resets the statement when dropped, on every exit path.
        let mut rows = self.query(params)?;
        while let Some(row) = rows.next()? {
            f(row)?;
        }
        Ok(())
    }
}

impl RowSource for Row<'_> {
    fn text(&self, column: &str) -> AppResult<String> {
        Ok(self.get::<_, String>(column)?)
    }

    fn integer(&self, column: &str) -> AppResult<i64> {
        Ok(self.get::<_, i64>(column)?)
    }

    fn column_index(&self, column: &str) -> AppResult<usize> {
        let stmt: &rusqlite::Statement<'_> = self.as_ref();
        Ok(stmt.column_index(column)?)
    }
}
