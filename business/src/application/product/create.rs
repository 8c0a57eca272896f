use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.code));

        let candidate = NewProduct::new(NewProductProps {
            code: params.code,
            name: params.name,
            price: params.price,
            quantity: params.quantity,
        })?;
        let code = candidate.code.as_str();

        let exists = self
            .repository
            .exists_by_code(&candidate.code)
            .await
            .map_err(|e| ProductError::from_repository(e, code))?;
        if exists {
            self.logger
                .warn(&format!("Rejected duplicate product code: {}", code));
            return Err(ProductError::DuplicateCode(code.to_string()));
        }

        // The unique index still decides when two creates race past the check above.
        let product = self
            .repository
            .insert(&candidate)
            .await
            .map_err(|e| ProductError::from_repository(e, code))?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
