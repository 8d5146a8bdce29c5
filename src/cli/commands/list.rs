use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::DutyStore;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::{self, DateRange};
use crate::utils::table::{Column, Table};
use chrono::Datelike;

fn resolve_period(period: &Option<String>) -> AppResult<DateRange> {
    match period {
        Some(p) => date::range_from_period(p),
        None => {
            let today = date::today();
            DateRange::month(today.year(), today.month())
        }
    }
}

/// List assignments or reports for a period, workers resolved via their
/// foreign keys.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, reports } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let range = resolve_period(period)?;

        if *reports {
            list_reports(&mut pool, &range)?;
        } else {
            list_assignments(&mut pool, &range)?;
        }
    }

    Ok(())
}

fn list_assignments(pool: &mut DbPool, range: &DateRange) -> AppResult<()> {
    let views = pool.assignment_views(range)?;

    if views.is_empty() {
        info(format!(
            "No assignments between {} and {}",
            range.start_str(),
            range.end_str()
        ));
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Slot", 14),
        Column::new("Primary", 24),
        Column::new("Backup", 24),
    ]);

    for v in &views {
        table.add_row(vec![
            v.assignment.date_str(),
            v.assignment.slot_type.label().to_string(),
            format!("{} (#{})", v.primary_worker.name, v.primary_worker.id),
            format!("{} (#{})", v.backup_worker.name, v.backup_worker.id),
        ]);
    }

    print!("{}", table.render());
    println!("{} assignments", views.len());
    Ok(())
}

fn list_reports(pool: &mut DbPool, range: &DateRange) -> AppResult<()> {
    let views = pool.report_views(range)?;

    if views.is_empty() {
        info(format!(
            "No reports between {} and {}",
            range.start_str(),
            range.end_str()
        ));
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Assignment", 10),
        Column::new("Duty worker", 24),
        Column::new("Done%", 5),
        Column::new("Pending", 24),
    ]);

    for v in &views {
        table.add_row(vec![
            v.report.date_str(),
            v.report.assignment_id.to_string(),
            format!("{} (#{})", v.duty_worker.name, v.duty_worker.id),
            v.report.body.completion_rate.to_string(),
            v.report.body.handover_pending.clone(),
        ]);
    }

    print!("{}", table.render());
    println!("{} reports", views.len());
    Ok(())
}
