mod issue;
mod milestone;
mod team;

use serde::{Deserialize, Serialize};

pub use issue::*;
pub use milestone::*;
pub use team::*;

/// GraphQL connection wrapper; Linear returns list fields as `{ nodes: [...] }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}
