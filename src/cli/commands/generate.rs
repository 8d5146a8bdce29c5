use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::regenerate::{RegenOptions, regenerate_month};
use crate::core::reports::{DefaultContent, ReportCutoff};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

/// Regenerate all duty assignments (and report skeletons) for one month.
/// Re-running for the same month replaces the previous batch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        year,
        month,
        seed,
        past_only,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let cutoff = if *past_only || !cfg.include_future_reports {
            ReportCutoff::OnOrBefore(date::today())
        } else {
            ReportCutoff::All
        };

        let opts = RegenOptions {
            min_workers: cfg.min_workers,
            cutoff,
        };

        let mut content = match seed.or(cfg.report_seed) {
            Some(s) => DefaultContent::seeded(s),
            None => DefaultContent::from_clock(),
        };

        let outcome = regenerate_month(&mut pool, *year, *month, &opts, &mut content)?;

        let target = format!("{}-{:02}", year, month);
        ttlog(
            &pool.conn,
            "generate",
            &target,
            &format!(
                "Regenerated {}: {} assignments ({} replaced), {} reports",
                target,
                outcome.assignments.len(),
                outcome.deleted,
                outcome.reports
            ),
        )?;

        success(format!(
            "Duty roster for {} generated: {} assignments, {} reports ({} previous assignments replaced)",
            target,
            outcome.assignments.len(),
            outcome.reports,
            outcome.deleted
        ));
    }

    Ok(())
}
