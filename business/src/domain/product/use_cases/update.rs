use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// `code` addresses the product; `new_code` is the code echoed in the request
/// body and must match it.
pub struct UpdateProductParams {
    pub code: String,
    pub new_code: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
