use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        code,
        new_code,
        discount,
        description,
    } = cmd
    {
        let req = EditRequest {
            new_code: new_code.clone(),
            discount: discount.clone(),
            description: description.clone(),
        };

        if req.new_code.is_none() && req.discount.is_none() && req.description.is_none() {
            info("Nothing to change.");
            return Ok(());
        }

        let mut pool = DbPool::new(cfg.database_path())?;
        let pc = EditLogic::apply(&mut pool, code, &req)?;
        success(format!("Updated {}", pc));
    }

    Ok(())
}
