use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_code::{
    GetProductByCodeParams, GetProductByCodeUseCase,
};
use crate::domain::product::value_objects::ProductCode;

pub struct GetProductByCodeUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByCodeUseCase for GetProductByCodeUseCaseImpl {
    async fn execute(&self, params: GetProductByCodeParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by code: {}", params.code));

        let product = self
            .repository
            .get_by_code(&ProductCode::lookup(params.code.as_str()))
            .await
            .map_err(|e| ProductError::from_repository(e, &params.code))?;

        Ok(product)
    }
}
