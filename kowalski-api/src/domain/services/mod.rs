mod directory;
mod time_records;

pub use directory::DirectoryServiceImpl;
pub use time_records::TimeRecordServiceImpl;
