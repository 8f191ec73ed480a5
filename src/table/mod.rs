mod person_table;

use crate::error::*;
use async_trait::async_trait;

pub use person_table::InMemoryPersonTable;

/// Directory answering whether a person id is known
#[async_trait]
pub trait PersonTable: Send + Sync {
  async fn exists(&self, person_id: i64) -> Result<bool>;
}
