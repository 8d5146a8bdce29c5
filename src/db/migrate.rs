use rusqlite::{Connection, OptionalExtension, Result};

/// Check whether a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `workers` table exists.
fn ensure_workers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workers (
            id         INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            department TEXT NOT NULL DEFAULT '',
            rank       TEXT NOT NULL DEFAULT '',
            email      TEXT NOT NULL DEFAULT '',
            phone      TEXT NOT NULL DEFAULT '',
            excluded   INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `assignments` table exists with the modern schema.
fn ensure_assignments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS assignments (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            date              TEXT NOT NULL,
            slot_type         TEXT NOT NULL
                CHECK(slot_type IN ('weekday_night','weekend_day','weekend_night')),
            primary_worker_id INTEGER NOT NULL REFERENCES workers(id),
            backup_worker_id  INTEGER NOT NULL REFERENCES workers(id),
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL,
            UNIQUE(date, slot_type),
            CHECK(primary_worker_id <> backup_worker_id)
        );

        CREATE INDEX IF NOT EXISTS idx_assignments_date ON assignments(date);
        "#,
    )?;
    Ok(())
}

/// Ensure that the `reports` table exists. Reports cascade with their
/// assignment; `ON DELETE CASCADE` needs foreign_keys=ON per connection,
/// which the pool sets.
fn ensure_reports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            report_date          TEXT NOT NULL,
            assignment_id        INTEGER NOT NULL
                REFERENCES assignments(id) ON DELETE CASCADE,
            duty_worker_id       INTEGER NOT NULL REFERENCES workers(id),
            instruction_datetime TEXT NOT NULL DEFAULT '',
            instruction_content  TEXT NOT NULL DEFAULT '',
            instruction_handover TEXT NOT NULL DEFAULT '',
            patrol_datetime      TEXT NOT NULL DEFAULT '',
            patrol_content       TEXT NOT NULL DEFAULT '',
            patrol_actions       TEXT NOT NULL DEFAULT '',
            patrol_notes         TEXT NOT NULL DEFAULT '',
            handover_issues      TEXT NOT NULL DEFAULT '',
            handover_pending     TEXT NOT NULL DEFAULT '',
            handover_notes       TEXT NOT NULL DEFAULT '',
            completion_rate      INTEGER NOT NULL DEFAULT 0
                CHECK(completion_rate BETWEEN 0 AND 100),
            created_at           TEXT NOT NULL,
            updated_at           TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_date ON reports(report_date);
        CREATE INDEX IF NOT EXISTS idx_reports_assignment ON reports(assignment_id);
        "#,
    )?;
    Ok(())
}

/// Bring a database (new or existing) up to the current schema.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_workers_table(conn)?;
    ensure_assignments_table(conn)?;
    ensure_reports_table(conn)?;
    Ok(())
}

/// True when the core tables are present (used by `db --info`).
pub fn schema_present(conn: &Connection) -> Result<bool> {
    Ok(table_exists(conn, "workers")?
        && table_exists(conn, "assignments")?
        && table_exists(conn, "reports")?)
}
