mod activity;
mod ids;
mod project;
mod task;
mod time_record;
mod user;

pub use activity::*;
pub use ids::*;
pub use project::*;
pub use task::*;
pub use time_record::*;
pub use user::*;
