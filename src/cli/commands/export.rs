use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DutyStore;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json};
use crate::ui::messages::success;
use crate::utils::date::{self, DateRange};
use chrono::Datelike;
use std::path::Path;

/// Export worker-joined assignment or report views to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        reports,
        force,
    } = cmd
    {
        if Path::new(file).exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                file
            )));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let range = match range {
            Some(r) => date::range_from_period(r)?,
            None => {
                let today = date::today();
                DateRange::month(today.year(), today.month())?
            }
        };

        let exported = if *reports {
            let views = pool.report_views(&range)?;
            match format {
                ExportFormat::Csv => csv::write_reports_csv(file, &views)?,
                ExportFormat::Json => json::write_json(file, &views)?,
            }
            views.len()
        } else {
            let views = pool.assignment_views(&range)?;
            match format {
                ExportFormat::Csv => csv::write_assignments_csv(file, &views)?,
                ExportFormat::Json => json::write_json(file, &views)?,
            }
            views.len()
        };

        success(format!(
            "Exported {} {} to {}",
            exported,
            if *reports { "reports" } else { "assignments" },
            file
        ));
    }

    Ok(())
}
