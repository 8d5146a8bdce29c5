use crate::errors::{AppError, AppResult};
use crate::models::assignment::{Assignment, NewAssignment};
use crate::models::report::{NewReport, Report, ReportBody};
use crate::models::slot_type::SlotType;
use crate::models::worker::Worker;
use crate::utils::date::DateRange;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};
use std::collections::HashMap;

// All query helpers take a plain `&Connection` so they also work inside a
// `rusqlite::Transaction` (which derefs to one).

fn parse_date_col(row: &Row, col: &str) -> Result<NaiveDate> {
    let s: String = row.get(col)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.clone())),
        )
    })
}

// ---------------------------
// Workers
// ---------------------------

pub fn map_worker_row(row: &Row) -> Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
        department: row.get("department")?,
        rank: row.get("rank")?,
        email: row.get("email")?,
        phone: row.get("phone")?,
        excluded: row.get::<_, i64>("excluded")? == 1,
    })
}

pub fn insert_worker(conn: &Connection, w: &Worker) -> AppResult<i64> {
    // id 0 means "let SQLite pick the next one" (CSV import passes real ids)
    if w.id > 0 {
        conn.execute(
            "INSERT INTO workers (id, name, department, rank, email, phone, excluded)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                w.id,
                w.name,
                w.department,
                w.rank,
                w.email,
                w.phone,
                if w.excluded { 1 } else { 0 }
            ],
        )?;
        Ok(w.id)
    } else {
        conn.execute(
            "INSERT INTO workers (name, department, rank, email, phone, excluded)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                w.name,
                w.department,
                w.rank,
                w.email,
                w.phone,
                if w.excluded { 1 } else { 0 }
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

pub fn list_workers(conn: &Connection, include_excluded: bool) -> AppResult<Vec<Worker>> {
    let sql = if include_excluded {
        "SELECT * FROM workers ORDER BY id ASC"
    } else {
        "SELECT * FROM workers WHERE excluded = 0 ORDER BY id ASC"
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_worker_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The registry contract: eligible workers only, ascending by id.
pub fn list_eligible_workers(conn: &Connection) -> AppResult<Vec<Worker>> {
    list_workers(conn, false)
}

pub fn set_worker_excluded(conn: &Connection, id: i64, excluded: bool) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE workers SET excluded = ?2 WHERE id = ?1",
        params![id, if excluded { 1 } else { 0 }],
    )?;

    if changed == 0 {
        return Err(AppError::UnknownWorker(id));
    }
    Ok(())
}

/// All workers keyed by id, for FK resolution in the view queries.
pub fn workers_by_id(conn: &Connection) -> AppResult<HashMap<i64, Worker>> {
    let all = list_workers(conn, true)?;
    Ok(all.into_iter().map(|w| (w.id, w)).collect())
}

// ---------------------------
// Assignments
// ---------------------------

pub fn map_assignment_row(row: &Row) -> Result<Assignment> {
    let slot_str: String = row.get("slot_type")?;
    let slot_type = SlotType::from_db_str(&slot_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidSlotType(slot_str.clone())),
        )
    })?;

    Ok(Assignment {
        id: row.get("id")?,
        date: parse_date_col(row, "date")?,
        slot_type,
        primary_worker_id: row.get("primary_worker_id")?,
        backup_worker_id: row.get("backup_worker_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert one generated assignment and return the persisted row.
pub fn insert_assignment(conn: &Connection, na: &NewAssignment) -> AppResult<Assignment> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO assignments
            (date, slot_type, primary_worker_id, backup_worker_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            na.date.format("%Y-%m-%d").to_string(),
            na.slot_type.to_db_str(),
            na.primary_worker_id,
            na.backup_worker_id,
            now,
            now,
        ],
    )?;

    Ok(Assignment {
        id: conn.last_insert_rowid(),
        date: na.date,
        slot_type: na.slot_type,
        primary_worker_id: na.primary_worker_id,
        backup_worker_id: na.backup_worker_id,
        created_at: now.clone(),
        updated_at: now,
    })
}

pub fn delete_assignments_in_range(conn: &Connection, range: &DateRange) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM assignments WHERE date >= ?1 AND date <= ?2",
        params![range.start_str(), range.end_str()],
    )?;
    Ok(n)
}

pub fn query_assignments(conn: &Connection, range: &DateRange) -> AppResult<Vec<Assignment>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM assignments
         WHERE date >= ?1 AND date <= ?2
         ORDER BY date ASC, slot_type ASC",
    )?;

    let rows = stmt.query_map(
        params![range.start_str(), range.end_str()],
        map_assignment_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Reports
// ---------------------------

pub fn map_report_row(row: &Row) -> Result<Report> {
    Ok(Report {
        id: row.get("id")?,
        report_date: parse_date_col(row, "report_date")?,
        assignment_id: row.get("assignment_id")?,
        duty_worker_id: row.get("duty_worker_id")?,
        body: ReportBody {
            instruction_datetime: row.get("instruction_datetime")?,
            instruction_content: row.get("instruction_content")?,
            instruction_handover: row.get("instruction_handover")?,
            patrol_datetime: row.get("patrol_datetime")?,
            patrol_content: row.get("patrol_content")?,
            patrol_actions: row.get("patrol_actions")?,
            patrol_notes: row.get("patrol_notes")?,
            handover_issues: row.get("handover_issues")?,
            handover_pending: row.get("handover_pending")?,
            handover_notes: row.get("handover_notes")?,
            completion_rate: row.get::<_, i64>("completion_rate")? as u8,
        },
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn insert_report(conn: &Connection, nr: &NewReport) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO reports
            (report_date, assignment_id, duty_worker_id,
             instruction_datetime, instruction_content, instruction_handover,
             patrol_datetime, patrol_content, patrol_actions, patrol_notes,
             handover_issues, handover_pending, handover_notes,
             completion_rate, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
        params![
            nr.report_date.format("%Y-%m-%d").to_string(),
            nr.assignment_id,
            nr.duty_worker_id,
            nr.body.instruction_datetime,
            nr.body.instruction_content,
            nr.body.instruction_handover,
            nr.body.patrol_datetime,
            nr.body.patrol_content,
            nr.body.patrol_actions,
            nr.body.patrol_notes,
            nr.body.handover_issues,
            nr.body.handover_pending,
            nr.body.handover_notes,
            nr.body.completion_rate as i64,
            now,
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Delete the reports whose assignment falls in the range. Run before
/// deleting the assignments themselves so the no-orphans outcome never
/// depends on the cascade pragma.
pub fn delete_reports_in_range(conn: &Connection, range: &DateRange) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM reports WHERE assignment_id IN
            (SELECT id FROM assignments WHERE date >= ?1 AND date <= ?2)",
        params![range.start_str(), range.end_str()],
    )?;
    Ok(n)
}

pub fn query_reports(conn: &Connection, range: &DateRange) -> AppResult<Vec<Report>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM reports
         WHERE report_date >= ?1 AND report_date <= ?2
         ORDER BY report_date ASC, assignment_id ASC",
    )?;

    let rows = stmt.query_map(params![range.start_str(), range.end_str()], map_report_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
