mod directory;
mod time_records;

pub use directory::*;
pub use time_records::*;
