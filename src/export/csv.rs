use crate::errors::{AppError, AppResult};
use crate::models::assignment::AssignmentView;
use crate::models::report::ReportView;
use csv::Writer;

fn csv_err(what: &str, e: csv::Error) -> AppError {
    AppError::Export(format!("CSV {} error: {}", what, e))
}

/// Write the worker-joined assignment views as CSV.
pub fn write_assignments_csv(path: &str, views: &[AssignmentView]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| csv_err("open", e))?;

    wtr.write_record([
        "date",
        "slot_type",
        "primary_id",
        "primary_name",
        "backup_id",
        "backup_name",
    ])
    .map_err(|e| csv_err("write", e))?;

    for v in views {
        wtr.write_record(&[
            v.assignment.date_str(),
            v.assignment.slot_type.to_db_str().to_string(),
            v.primary_worker.id.to_string(),
            v.primary_worker.name.clone(),
            v.backup_worker.id.to_string(),
            v.backup_worker.name.clone(),
        ])
        .map_err(|e| csv_err("write", e))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the worker-joined report views as CSV.
pub fn write_reports_csv(path: &str, views: &[ReportView]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| csv_err("open", e))?;

    wtr.write_record([
        "report_date",
        "assignment_id",
        "duty_worker_id",
        "duty_worker_name",
        "completion_rate",
        "handover_notes",
    ])
    .map_err(|e| csv_err("write", e))?;

    for v in views {
        wtr.write_record(&[
            v.report.date_str(),
            v.report.assignment_id.to_string(),
            v.duty_worker.id.to_string(),
            v.duty_worker.name.clone(),
            v.report.body.completion_rate.to_string(),
            v.report.body.handover_notes.clone(),
        ])
        .map_err(|e| csv_err("write", e))?;
    }

    wtr.flush()?;
    Ok(())
}
