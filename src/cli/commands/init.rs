use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// Creates the config directory, the configuration file (skipped in test
/// mode), the SQLite file, and runs all pending migrations.
pub fn handle(cfg: &Config, is_test: bool) -> AppResult<()> {
    let db_path = cfg.init_all(is_test)?;

    println!("⚙️  Initializing productcodes…");
    if !is_test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", db_path.display()),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
