use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning(format!("No config file at {}", path.display()));
            }
        }

        if *check {
            let mut ok = true;

            for (label, dir) in [
                ("databases folder", &cfg.databases_dir),
                ("exports folder", &cfg.export_dir),
            ] {
                if Path::new(dir).exists() {
                    success(format!("{label}: {dir}"));
                } else {
                    warning(format!("{label} missing: {dir} (run `rollcall init`)"));
                    ok = false;
                }
            }

            if Path::new(&cfg.database).exists() {
                success(format!("database: {}", cfg.database));
            } else {
                warning(format!("database missing: {}", cfg.database));
                ok = false;
            }

            if ok {
                success("Configuration looks good.");
            }
        }
    }

    Ok(())
}
