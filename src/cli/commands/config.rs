use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                info(format!("Configuration file: {}", path.display()));
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning(format!("No config file found at {}", path.display()));
            }
        }

        if *check {
            let missing = Config::missing_fields()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing field: {key}"));
                }
            }
        }
    }

    Ok(())
}
