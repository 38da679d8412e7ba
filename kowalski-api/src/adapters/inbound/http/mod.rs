mod links;
mod responses;

pub use links::*;
pub use responses::*;
