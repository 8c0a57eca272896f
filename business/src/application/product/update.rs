use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductCode;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.code));

        // Checked before any lookup so a mismatched request never reveals whether the code exists
        if params.new_code != params.code {
            self.logger.warn(&format!(
                "Rejected code change for product {} to {}",
                params.code, params.new_code
            ));
            return Err(ProductError::ImmutableFieldViolation(params.code));
        }

        let mut product = self
            .repository
            .get_by_code(&ProductCode::lookup(params.code.as_str()))
            .await
            .map_err(|e| ProductError::from_repository(e, &params.code))?;

        product.apply_changes(ProductChanges {
            name: params.name,
            price: params.price,
            quantity: params.quantity,
        })?;

        let updated_product = self
            .repository
            .update(&product)
            .await
            .map_err(|e| ProductError::from_repository(e, &params.code))?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.code));
        Ok(updated_product)
    }
}
