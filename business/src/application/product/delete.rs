use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::value_objects::ProductCode;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.code));

        let code = ProductCode::lookup(params.code.as_str());

        // Verify product exists before deleting
        let exists = self
            .repository
            .exists_by_code(&code)
            .await
            .map_err(|e| ProductError::from_repository(e, &params.code))?;
        if !exists {
            return Err(ProductError::NotFound(params.code));
        }

        self.repository
            .delete_by_code(&code)
            .await
            .map_err(|e| ProductError::from_repository(e, &params.code))?;

        self.logger
            .info(&format!("Product deleted: {}", params.code));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, Product};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_code(&self, code: &ProductCode) -> Result<Product, RepositoryError>;
            async fn exists_by_code(&self, code: &ProductCode) -> Result<bool, RepositoryError>;
            async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
            async fn delete_by_code(&self, code: &ProductCode) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_product_when_it_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_exists_by_code().returning(|_| Ok(true));
        mock_repo
            .expect_delete_by_code()
            .withf(|code| code.as_str() == "P001")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                code: "P001".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_exists_by_code().returning(|_| Ok(false));
        mock_repo.expect_delete_by_code().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                code: "NO_EXISTE".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::NotFound(code) if code == "NO_EXISTE"
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_concurrently_deleted() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_exists_by_code().returning(|_| Ok(true));
        mock_repo
            .expect_delete_by_code()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                code: "P001".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(_)));
    }
}
