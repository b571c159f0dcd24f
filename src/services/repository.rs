//! Item persistence collaborator.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::RwLock;
use thiserror::Error;

use crate::model::{CreateItemCommand, Item};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Item rejected: {reason}")]
    Rejected { reason: String },

    #[error("Item storage unavailable")]
    Unavailable,
}

/// Stores created items. The creation flow only needs success or failure.
pub trait ItemRepository: Send + Sync + 'static {
    fn create(
        &self,
        command: CreateItemCommand,
    ) -> impl Future<Output = Result<Item, RepositoryError>> + Send;
}

/// Process-local item list.
#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
    fail_next: AtomicUsize,
    latency: Duration,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every write by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Reject the next `count` writes with `Unavailable`.
    pub fn fail_next(&self, count: usize) {
        self.fail_next.store(count, Ordering::SeqCst);
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, command: CreateItemCommand) -> Result<Item, RepositoryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let should_fail = self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(RepositoryError::Unavailable);
        }

        let item = Item::from_command(command);
        self.items.write().push(item.clone());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemCategory;

    fn command(name: &str) -> CreateItemCommand {
        CreateItemCommand {
            name: name.into(),
            description: String::new(),
            category: ItemCategory::DailySupplies,
            image: None,
        }
    }

    #[tokio::test]
    async fn create_stores_item() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(command("Towel")).await.unwrap();
        assert_eq!(item.name, "Towel");
        assert_eq!(repo.items(), vec![item]);
    }

    #[tokio::test]
    async fn fail_next_rejects_then_recovers() {
        let repo = InMemoryItemRepository::new();
        repo.fail_next(1);
        assert_eq!(
            repo.create(command("Towel")).await,
            Err(RepositoryError::Unavailable)
        );
        assert!(repo.is_empty());
        assert!(repo.create(command("Towel")).await.is_ok());
        assert_eq!(repo.len(), 1);
    }
}
