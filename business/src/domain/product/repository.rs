use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::ProductCode;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_code(&self, code: &ProductCode) -> Result<Product, RepositoryError>;
    async fn exists_by_code(&self, code: &ProductCode) -> Result<bool, RepositoryError>;
    /// Inserts and returns the stored product with its assigned id.
    /// Fails with `Duplicated` when the code is already taken.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    /// Fails with `NotFound` when no row was removed.
    async fn delete_by_code(&self, code: &ProductCode) -> Result<(), RepositoryError>;
}
