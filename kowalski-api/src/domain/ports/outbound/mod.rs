mod directory;
mod time_record;

pub use directory::*;
pub use time_record::*;
