use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::value_objects::EmptyListPolicy;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub empty_list_policy: EmptyListPolicy,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await?;

        if products.is_empty() && self.empty_list_policy == EmptyListPolicy::Reject {
            self.logger.warn("No products registered");
            return Err(ProductError::EmptyCollection);
        }

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
