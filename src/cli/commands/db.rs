use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::consistency::verify_linkage;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{migrate, queries};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::DateRange;
use chrono::NaiveDate;

/// Full rows span; used by the integrity check over the whole database.
fn all_time() -> DateRange {
    DateRange {
        start: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
    }
}

/// Database maintenance: migrations, integrity + linkage checks, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate: run_migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *run_migrate {
            migrate::run_pending_migrations(&pool.conn)?;
            success("Migrations complete");
        }

        if *check {
            let integrity: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            info(format!("SQLite integrity: {}", integrity));

            let range = all_time();
            let assignments = queries::query_assignments(&pool.conn, &range)?;
            let reports = queries::query_reports(&pool.conn, &range)?;
            verify_linkage(&assignments, &reports)?;
            success(format!(
                "Linkage OK: {} assignments, {} reports",
                assignments.len(),
                reports.len()
            ));
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database vacuumed");
        }

        if *show_info {
            init_db(&pool.conn)?;
            info(format!("Database: {}", cfg.database));
            info(format!(
                "Schema present: {}",
                migrate::schema_present(&pool.conn)?
            ));

            let workers: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM workers", [], |row| row.get(0))?;
            let assignments: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM assignments", [], |row| row.get(0))?;
            let reports: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
            info(format!(
                "{} workers, {} assignments, {} reports",
                workers, assignments, reports
            ));
        }
    }

    Ok(())
}
