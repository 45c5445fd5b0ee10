use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::db::queries::SaveOutcome;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        code,
        discount,
        description,
        atomic,
    } = cmd
    {
        let pc = AddLogic::parse(code, discount, description)?;
        let mut pool = DbPool::new(cfg.database_path())?;

        match AddLogic::apply(&mut pool, &pc, *atomic)? {
            SaveOutcome::Inserted => success(format!("Inserted {}", pc)),
            SaveOutcome::Updated => success(format!("Updated {}", pc)),
        }
    }

    Ok(())
}
