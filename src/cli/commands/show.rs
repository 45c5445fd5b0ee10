use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { code } = cmd {
        let pool = DbPool::new(cfg.database_path())?;
        let pc = queries::find(&pool.conn, code)?.ok_or_else(|| AppError::NotFound(code.clone()))?;
        println!("{pc}");
    }

    Ok(())
}
