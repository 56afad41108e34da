//! Project store contract and SQLite implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;

use pen_storage::Database;

use crate::error::ProjectError;
use crate::project::Project;
use crate::Result;

/// Durable keyed storage of projects by name.
///
/// `put` creates or overwrites; the store holds at most one project
/// per name.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn put(&self, name: &str, source: &str) -> Result<Project>;
    async fn get(&self, name: &str) -> Result<Option<Project>>;
    async fn list(&self) -> Result<Vec<Project>>;
    async fn delete(&self, name: &str) -> Result<()>;
}

pub struct SqliteProjectStore {
    db: Database,
}

impl SqliteProjectStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn row_to_project(row: &rusqlite::Row<'_>) -> rusqlite::Result<Project> {
    // Parse datetime strings
    let created_str: String = row.get(2)?;
    let updated_str: String = row.get(3)?;

    let created_at = DateTime::parse_from_rfc3339(&created_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());
    let updated_at = DateTime::parse_from_rfc3339(&updated_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Ok(Project {
        name: row.get(0)?,
        source: row.get(1)?,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn put(&self, name: &str, source: &str) -> Result<Project> {
        let now = Utc::now().to_rfc3339();

        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO projects (name, source, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?3)
                 ON CONFLICT(name) DO UPDATE SET
                     source = excluded.source,
                     updated_at = excluded.updated_at",
                rusqlite::params![name, source, now],
            )?;
            Ok(())
        })?;

        // Read back the stored row so overwrites return the original created_at
        self.get(name)
            .await?
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))
    }

    async fn get(&self, name: &str) -> Result<Option<Project>> {
        let project = self.db.with_connection(|conn| {
            let project = conn
                .query_row(
                    "SELECT name, source, created_at, updated_at FROM projects WHERE name = ?1",
                    [name],
                    row_to_project,
                )
                .optional()?;
            Ok(project)
        })?;

        Ok(project)
    }

    async fn list(&self) -> Result<Vec<Project>> {
        let projects = self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT name, source, created_at, updated_at FROM projects
                 ORDER BY updated_at DESC",
            )?;

            let projects: Vec<Project> = stmt
                .query_map([], row_to_project)?
                .filter_map(|r| r.ok())
                .collect();

            Ok(projects)
        })?;

        Ok(projects)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.db.with_connection(|conn| {
            conn.execute("DELETE FROM projects WHERE name = ?1", [name])?;
            Ok(())
        })?;

        Ok(())
    }
}

impl Clone for SqliteProjectStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
