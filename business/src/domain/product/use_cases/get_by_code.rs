use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductByCodeParams {
    pub code: String,
}

#[async_trait]
pub trait GetProductByCodeUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByCodeParams) -> Result<Product, ProductError>;
}
