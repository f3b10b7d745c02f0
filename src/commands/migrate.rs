//! Migrate command - Schema management for the course database.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, MigrationState};

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::open(&config.database_url).await?;

    match args.action {
        MigrateAction::Up => {
            let applied = db.migrate_up().await?;
            if applied.is_empty() {
                tracing::info!("No pending migrations");
            }
            for name in &applied {
                tracing::info!(migration = %name, "Applied");
            }
        }
        MigrateAction::Down => match db.migrate_down().await? {
            Some(name) => tracing::info!(migration = %name, "Rolled back"),
            None => tracing::info!("No applied migrations to roll back"),
        },
        MigrateAction::Status => {
            let states = db.migration_states().await?;
            for state in &states {
                println!("{}", state);
            }
            println!("{}", summary(&states));
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping the person and books tables");
            let count = db.reset().await?;
            tracing::info!(applied = count, "Schema rebuilt from scratch");
        }
    }

    Ok(())
}

fn summary(states: &[MigrationState]) -> String {
    let applied = states.iter().filter(|s| s.applied).count();
    format!("{} applied, {} pending", applied, states.len() - applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, applied: bool) -> MigrationState {
        MigrationState {
            name: name.to_string(),
            applied,
        }
    }

    #[test]
    fn summary_counts_applied_and_pending() {
        let states = [
            state("m20240101_000001_create_person_table", true),
            state("m20240101_000002_create_books_table", false),
        ];

        assert_eq!(summary(&states), "1 applied, 1 pending");
        assert_eq!(summary(&[]), "0 applied, 0 pending");
    }
}
