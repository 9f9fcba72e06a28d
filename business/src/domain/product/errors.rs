#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_id")]
    InvalidId,
    #[error("repository.failure")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
