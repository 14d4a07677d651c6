use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::models::{ActivitiesRow, Activity, ActivityParticipantsRow, NewActivity};

const SQL_CREATE_ACTIVITIES: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL UNIQUE,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL CHECK (max_participants > 0)
)
"#;

const SQL_CREATE_ACTIVITY_PARTICIPANTS: &str = r#"
CREATE TABLE IF NOT EXISTS activity_participants (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  activity_name TEXT NOT NULL REFERENCES activities(name) ON DELETE CASCADE,
  email TEXT NOT NULL,
  UNIQUE (activity_name, email)
)
"#;

const SQL_DROP_ACTIVITY_PARTICIPANTS: &str = "DROP TABLE IF EXISTS activity_participants";
const SQL_DROP_ACTIVITIES: &str = "DROP TABLE IF EXISTS activities";

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
ORDER BY id ASC
"#;

const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT
  activity_name,
  email
FROM activity_participants
ORDER BY id ASC
"#;

const SQL_LOAD_ACTIVITY_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  schedule,
  max_participants
FROM activities
WHERE name = ?
LIMIT 1
"#;

const SQL_LIST_PARTICIPANTS_BY_ACTIVITY: &str = r#"
SELECT
  activity_name,
  email
FROM activity_participants
WHERE activity_name = ?
ORDER BY id ASC
"#;

// Single statement: inserts only when the activity exists, the UNIQUE
// constraint turns a duplicate into a no-op.
const SQL_ADD_PARTICIPANT: &str = r#"
INSERT OR IGNORE INTO activity_participants (activity_name, email)
SELECT name, ?
FROM activities
WHERE name = ?
"#;

const SQL_REMOVE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_name = ?
  AND email = ?
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants
) VALUES (?, ?, ?, ?)
"#;

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO activity_participants (
  activity_name,
  email
) VALUES (?, ?)
"#;

/// Durable keyed storage for activities.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    pool: SqlitePool,
}

impl ActivityStore {
    /// Connects to the configured database and creates the schema if needed.
    ///
    /// In-memory databases are pinned to one long-lived connection, since
    /// every SQLite connection to `:memory:` opens a separate database.
    pub async fn open(config: &StoreConfig) -> sqlx::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if config.database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        Self::with_pool(pool).await
    }

    /// Wraps an existing pool and creates the schema if needed.
    pub async fn with_pool(pool: SqlitePool) -> sqlx::Result<Self> {
        sqlx::query(SQL_CREATE_ACTIVITIES).execute(&pool).await?;
        sqlx::query(SQL_CREATE_ACTIVITY_PARTICIPANTS)
            .execute(&pool)
            .await?;
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("activity store closed");
    }

    /// Every stored activity in storage order, read from one snapshot.
    pub async fn list_all(&self) -> sqlx::Result<Vec<Activity>> {
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ACTIVITIES)
            .fetch_all(&mut *tx)
            .await?;
        let participant_rows = sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_PARTICIPANTS)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        let mut by_activity: HashMap<String, Vec<String>> = HashMap::new();
        for p in participant_rows {
            by_activity.entry(p.activity_name).or_default().push(p.email);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let participants = by_activity.remove(&row.name).unwrap_or_default();
                Activity::from_row(row, participants)
            })
            .collect())
    }

    pub async fn find_by_name(&self, name: &str) -> sqlx::Result<Option<Activity>> {
        let mut tx = self.pool.begin().await?;
        let Some(row) = sqlx::query_as::<_, ActivitiesRow>(SQL_LOAD_ACTIVITY_BY_NAME)
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        let participants =
            sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_PARTICIPANTS_BY_ACTIVITY)
                .bind(name)
                .fetch_all(&mut *tx)
                .await?;
        tx.commit().await?;

        let participants = participants.into_iter().map(|p| p.email).collect();
        Ok(Some(Activity::from_row(row, participants)))
    }

    /// Adds `email` to the activity's participants unless already present.
    ///
    /// Returns `false` when nothing changed: the student was already a member
    /// or the activity does not exist.
    pub async fn add_participant(&self, name: &str, email: &str) -> sqlx::Result<bool> {
        let res = sqlx::query(SQL_ADD_PARTICIPANT)
            .bind(email)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() == 1)
    }

    /// Removes `email` from the activity's participants. Returns whether a row was removed.
    pub async fn remove_participant(&self, name: &str, email: &str) -> sqlx::Result<bool> {
        let res = sqlx::query(SQL_REMOVE_PARTICIPANT)
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// Drops both tables and re-inserts `activities`, all in one transaction.
    pub async fn reset(&self, activities: &[NewActivity<'_>]) -> sqlx::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(SQL_DROP_ACTIVITY_PARTICIPANTS)
            .execute(&mut *tx)
            .await?;
        sqlx::query(SQL_DROP_ACTIVITIES).execute(&mut *tx).await?;
        sqlx::query(SQL_CREATE_ACTIVITIES).execute(&mut *tx).await?;
        sqlx::query(SQL_CREATE_ACTIVITY_PARTICIPANTS)
            .execute(&mut *tx)
            .await?;

        for activity in activities {
            insert_activity(&mut tx, activity).await?;
        }
        tx.commit().await?;
        Ok(())
    }
}

async fn insert_activity(
    tx: &mut Transaction<'_, Sqlite>,
    activity: &NewActivity<'_>,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(&mut **tx)
        .await?;

    for email in activity.participants {
        sqlx::query(SQL_INSERT_PARTICIPANT)
            .bind(activity.name)
            .bind(*email)
            .execute(&mut **tx)
            .await?;
    }
    debug!(
        "seeded {} with {} participants",
        activity.name,
        activity.participants.len()
    );
    Ok(())
}
