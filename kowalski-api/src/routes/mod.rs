pub(crate) mod activities;
pub(crate) mod error;
pub(crate) mod projects;
pub(crate) mod tasks;
pub(crate) mod time_records;
pub(crate) mod users;

pub(crate) use error::ApiError;
