//! Course database handle: connection, schema migrations and liveness.

use std::fmt;

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// A known migration and whether the database has applied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.applied { "applied" } else { "pending" };
        write!(f, "{}: {}", self.name, status)
    }
}

/// Shared handle over the person and books schema
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open a connection without touching the schema
    pub async fn open(database_url: &str) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(database_url).await?;
        Ok(Self { connection })
    }

    /// Open a connection and bring the schema up to date before serving
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let database = Self::open(&config.database_url).await?;

        let applied = database.migrate_up().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to bring the course schema up to date");
        })?;
        tracing::info!(applied = applied.len(), "Course schema is up to date");

        Ok(database)
    }

    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }

    /// Apply every pending migration; returns the names applied, oldest first.
    pub async fn migrate_up(&self) -> Result<Vec<String>, DbErr> {
        let pending: Vec<String> = Migrator::get_pending_migrations(&self.connection)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        if !pending.is_empty() {
            Migrator::up(&self.connection, None).await?;
        }
        Ok(pending)
    }

    /// Roll back the latest applied migration, if any, and return its name.
    pub async fn migrate_down(&self) -> Result<Option<String>, DbErr> {
        let latest = Migrator::get_applied_migrations(&self.connection)
            .await?
            .last()
            .map(|m| m.name().to_string());

        if latest.is_some() {
            Migrator::down(&self.connection, Some(1)).await?;
        }
        Ok(latest)
    }

    /// Drop every table and re-apply all migrations; returns how many ran.
    pub async fn reset(&self) -> Result<usize, DbErr> {
        Migrator::fresh(&self.connection).await?;
        Ok(Migrator::migrations().len())
    }

    pub async fn migration_states(&self) -> Result<Vec<MigrationState>, DbErr> {
        let states = Migrator::get_migration_with_status(&self.connection)
            .await?
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            })
            .collect();
        Ok(states)
    }
}
