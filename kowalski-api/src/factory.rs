//! Composition root.
//!
//! This is the ONLY place that imports concrete outbound adapters.

use std::sync::Arc;

use sqlx::PgPool;
use url::Url;

use crate::{
    adapters::{
        inbound::http::LinkAssembler,
        outbound::postgres::{
            PostgresActivityRepository, PostgresProjectRepository, PostgresTaskRepository,
            PostgresTimeRecordRepository, PostgresUserRepository,
        },
    },
    app_state::AppState,
    domain::services::{DirectoryServiceImpl, TimeRecordServiceImpl},
};

/// Wire the Postgres-backed services into an [`AppState`].
pub fn postgres_app_state(pool: PgPool, base_url: &Url) -> AppState {
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let tasks = Arc::new(PostgresTaskRepository::new(pool.clone()));
    let projects = Arc::new(PostgresProjectRepository::new(pool.clone()));
    let activities = Arc::new(PostgresActivityRepository::new(pool.clone()));
    let time_records = Arc::new(PostgresTimeRecordRepository::new(pool));

    let time_record_service =
        TimeRecordServiceImpl::new(time_records, users.clone(), tasks.clone());
    let directory_service = DirectoryServiceImpl::new(projects, activities, tasks, users);

    AppState::new(
        Arc::new(time_record_service),
        Arc::new(directory_service),
        LinkAssembler::new(base_url),
    )
}
