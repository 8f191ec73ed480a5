use super::PersonTable;
use crate::error::*;
use async_trait::async_trait;
use std::collections::HashSet;

/// Fixed, read-only set of person ids held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonTable {
  ids: HashSet<i64>,
}

impl InMemoryPersonTable {
  pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
    Self {
      ids: ids.into_iter().collect(),
    }
  }
  pub fn len(&self) -> usize {
    self.ids.len()
  }
}

#[async_trait]
impl PersonTable for InMemoryPersonTable {
  async fn exists(&self, person_id: i64) -> Result<bool> {
    Ok(self.ids.contains(&person_id))
  }
}
