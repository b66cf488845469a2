#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.service: {0}")]
    Service(#[from] crate::domain::errors::ServiceError),
}
