mod demo;
mod import;
mod models;
mod stats;

pub use demo::*;
pub use import::*;
pub use models::*;
pub use stats::*;
