use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        if *check {
            let missing = Config::missing_keys()?;
            if missing.is_empty() {
                success(format!("{} is complete.", Config::config_file().display()));
            } else {
                for key in missing {
                    warning(format!("Missing key '{key}' (default value applies)"));
                }
            }
        }
    }

    Ok(())
}
