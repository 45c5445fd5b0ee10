use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{OutputFormat, render};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        format,
        code_prefix,
    } = cmd
    {
        let pool = DbPool::new(cfg.database_path())?;
        let rows = ListLogic::load(&pool, code_prefix.as_deref())?;
        let format = format.unwrap_or(cfg.list_format);

        if rows.is_empty() && format == OutputFormat::Table {
            info("No product codes found.");
            return Ok(());
        }

        print!("{}", render(&rows, format, cfg.separator())?);
        if format == OutputFormat::Json {
            println!();
        }
    }

    Ok(())
}
