use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(cfg.database_path())?;
        let rows = ListLogic::load(&pool, None)?;
        ExportLogic::export(&rows, *format, Path::new(file), *force, cfg.separator())?;
    }

    Ok(())
}
