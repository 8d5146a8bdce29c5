use crate::cli::parser::{Commands, WorkerAction};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::worker::Worker;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

/// Manage the worker roster backing the scheduler.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Worker { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    match action {
        WorkerAction::Add {
            name,
            department,
            rank,
            email,
            phone,
            id,
        } => {
            let w = Worker {
                id: id.unwrap_or(0),
                name: name.clone(),
                department: department.clone(),
                rank: rank.clone(),
                email: email.clone(),
                phone: phone.clone(),
                excluded: false,
            };
            let id = queries::insert_worker(&pool.conn, &w)?;
            ttlog(
                &pool.conn,
                "worker-add",
                &id.to_string(),
                &format!("Added worker {} ({})", name, id),
            )?;
            success(format!("Worker '{}' added with id {}", name, id));
        }

        WorkerAction::List { all } => {
            let workers = queries::list_workers(&pool.conn, *all)?;
            if workers.is_empty() {
                info("No workers in the roster");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 5),
                Column::new("Name", 20),
                Column::new("Department", 16),
                Column::new("Rank", 10),
                Column::new("Excluded", 8),
            ]);
            for w in &workers {
                table.add_row(vec![
                    w.id.to_string(),
                    w.name.clone(),
                    w.department.clone(),
                    w.rank.clone(),
                    if w.excluded { "yes" } else { "" }.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        WorkerAction::Exclude { id } => {
            queries::set_worker_excluded(&pool.conn, *id, true)?;
            ttlog(
                &pool.conn,
                "worker-exclude",
                &id.to_string(),
                &format!("Worker {} excluded from scheduling", id),
            )?;
            success(format!("Worker {} excluded from future runs", id));
        }

        WorkerAction::Include { id } => {
            queries::set_worker_excluded(&pool.conn, *id, false)?;
            ttlog(
                &pool.conn,
                "worker-include",
                &id.to_string(),
                &format!("Worker {} re-included in scheduling", id),
            )?;
            success(format!("Worker {} re-included", id));
        }

        WorkerAction::Import { file } => {
            let mut rdr = csv::Reader::from_path(file)
                .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;

            let mut count = 0;
            for record in rdr.deserialize::<Worker>() {
                let w = record.map_err(|e| crate::errors::AppError::Other(e.to_string()))?;
                queries::insert_worker(&pool.conn, &w)?;
                count += 1;
            }

            ttlog(
                &pool.conn,
                "worker-import",
                file,
                &format!("Imported {} workers from {}", count, file),
            )?;
            success(format!("Imported {} workers from {}", count, file));
        }
    }

    Ok(())
}
