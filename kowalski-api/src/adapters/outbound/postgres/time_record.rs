use async_trait::async_trait;
use sqlx::PgPool;
use time::{Date, Time};

use super::storage_error;
use crate::domain::{
    models::{NewTimeRecord, TaskId, TimeRecord, TimeRecordId, UserId},
    ports::outbound::TimeRecordRepository,
    StorageError,
};

#[derive(Debug, sqlx::FromRow)]
struct TimeRecordRow {
    id: i32,
    user_id: i32,
    task_id: i32,
    reported_day: Date,
    reported_time: Time,
    comment: Option<String>,
}

impl From<TimeRecordRow> for TimeRecord {
    fn from(row: TimeRecordRow) -> Self {
        Self {
            id: TimeRecordId::new(row.id),
            user_id: UserId::new(row.user_id),
            task_id: TaskId::new(row.task_id),
            reported_day: row.reported_day,
            reported_time: row.reported_time,
            comment: row.comment,
        }
    }
}

/// Adapter that implements TimeRecordRepository using PostgreSQL.
pub struct PostgresTimeRecordRepository {
    pool: PgPool,
}

impl PostgresTimeRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimeRecordRepository for PostgresTimeRecordRepository {
    async fn find_by_id(&self, id: &TimeRecordId) -> Result<Option<TimeRecord>, StorageError> {
        let row = sqlx::query_as::<_, TimeRecordRow>(
            r#"
            SELECT id, user_id, task_id, reported_day, reported_time, comment
            FROM time_records
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(TimeRecord::from))
    }

    async fn insert(&self, record: &NewTimeRecord) -> Result<TimeRecord, StorageError> {
        let row = sqlx::query_as::<_, TimeRecordRow>(
            r#"
            INSERT INTO time_records (user_id, task_id, reported_day, reported_time, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, task_id, reported_day, reported_time, comment
            "#,
        )
        .bind(record.user_id.as_i32())
        .bind(record.task_id.as_i32())
        .bind(record.reported_day)
        .bind(record.reported_time)
        .bind(&record.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.into())
    }

    async fn update(&self, record: &TimeRecord) -> Result<Option<TimeRecord>, StorageError> {
        let row = sqlx::query_as::<_, TimeRecordRow>(
            r#"
            UPDATE time_records
            SET user_id = $2,
                task_id = $3,
                reported_day = $4,
                reported_time = $5,
                comment = $6
            WHERE id = $1
            RETURNING id, user_id, task_id, reported_day, reported_time, comment
            "#,
        )
        .bind(record.id.as_i32())
        .bind(record.user_id.as_i32())
        .bind(record.task_id.as_i32())
        .bind(record.reported_day)
        .bind(record.reported_time)
        .bind(&record.comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(TimeRecord::from))
    }

    async fn delete(&self, id: &TimeRecordId) -> Result<bool, StorageError> {
        let result = sqlx::query(
            r#"
            DELETE FROM time_records
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, StorageError> {
        let rows = sqlx::query_as::<_, TimeRecordRow>(
            r#"
            SELECT id, user_id, task_id, reported_day, reported_time, comment
            FROM time_records
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(TimeRecord::from).collect())
    }

    async fn find_by_task(&self, task_id: &TaskId) -> Result<Vec<TimeRecord>, StorageError> {
        let rows = sqlx::query_as::<_, TimeRecordRow>(
            r#"
            SELECT id, user_id, task_id, reported_day, reported_time, comment
            FROM time_records
            WHERE task_id = $1
            ORDER BY id
            "#,
        )
        .bind(task_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(TimeRecord::from).collect())
    }
}
