use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

/// Print or sanity-check the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            match fs::read_to_string(&path) {
                Ok(content) => {
                    println!("# {}", path.display());
                    println!("{}", content);
                }
                Err(_) => {
                    warning(format!(
                        "No configuration file at {} (defaults in effect)",
                        path.display()
                    ));
                }
            }
        }

        if *check {
            let findings = cfg.check();
            if findings.is_empty() {
                success("Configuration OK");
            } else {
                for f in findings {
                    warning(f);
                }
            }
        }
    }

    Ok(())
}
