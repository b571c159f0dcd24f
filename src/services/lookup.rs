//! Product lookup collaborator.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::config::CatalogEntry;
use crate::model::{product_code, ProductInfo};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid product code '{0}'")]
    InvalidCode(String),

    #[error("Product service unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a scanned or typed product code to a form hint.
///
/// `Ok(None)` means the code is well-formed but unknown.
pub trait ProductLookup: Send + Sync + 'static {
    fn lookup(
        &self,
        code: String,
    ) -> impl Future<Output = Result<Option<ProductInfo>, LookupError>> + Send;
}

/// Lookup backed by a fixed catalogue, usually loaded from config.
#[derive(Debug, Default)]
pub struct CatalogLookup {
    products: HashMap<String, ProductInfo>,
    latency: Duration,
}

impl CatalogLookup {
    pub fn new(entries: &[CatalogEntry]) -> Self {
        let products = entries
            .iter()
            .map(|entry| {
                (
                    entry.code.trim().to_string(),
                    ProductInfo {
                        name: entry.name.clone(),
                        description: entry.description.clone(),
                        category: entry.category,
                    },
                )
            })
            .collect();
        Self {
            products,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductLookup for CatalogLookup {
    async fn lookup(&self, code: String) -> Result<Option<ProductInfo>, LookupError> {
        let Some(code) = product_code(&code) else {
            return Err(LookupError::InvalidCode(code.trim().to_string()));
        };
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(self.products.get(code).cloned())
    }
}
