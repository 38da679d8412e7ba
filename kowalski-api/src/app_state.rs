use std::sync::Arc;

use crate::{
    adapters::inbound::http::LinkAssembler,
    domain::ports::inbound::{DirectoryService, TimeRecordService},
};

#[derive(Clone)]
pub struct AppState {
    pub time_records: Arc<dyn TimeRecordService>,
    pub directory: Arc<dyn DirectoryService>,
    pub links: LinkAssembler,
}

impl AppState {
    pub fn new(
        time_records: Arc<dyn TimeRecordService>,
        directory: Arc<dyn DirectoryService>,
        links: LinkAssembler,
    ) -> Self {
        Self {
            time_records,
            directory,
            links,
        }
    }
}
