mod milestone;
mod project;
mod task;
mod team_member;

pub use milestone::*;
pub use project::*;
pub use task::*;
pub use team_member::*;
