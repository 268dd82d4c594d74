pub mod raw;
pub mod snapshot;
pub mod team_match;

pub use raw::*;
pub use snapshot::*;
pub use team_match::*;
