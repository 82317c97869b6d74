mod client;
mod models;

pub use client::*;
pub use models::*;
