use async_trait::async_trait;

use crate::domain::errors::ServiceError;

use super::model::Product;
use super::value_objects::ProductId;

/// Service port for the external product API.
///
/// Implementations own the transport; any non-success answer is an error.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn delete(&self, id: &ProductId) -> Result<(), ServiceError>;
}
