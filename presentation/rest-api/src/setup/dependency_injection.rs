use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_code::GetProductByCodeUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::products_config::ProductsConfig;

/// Builds every adapter and use case once per process.
pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, products_config: &ProductsConfig) -> Self {
        let repository: Arc<dyn ProductRepository> =
            Arc::new(ProductRepositoryPostgres::new(pool));
        Self::with_repository(repository, products_config)
    }

    pub fn with_repository(
        repository: Arc<dyn ProductRepository>,
        products_config: &ProductsConfig,
    ) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            empty_list_policy: products_config.empty_list_policy,
            logger: logger.clone(),
        });
        let get_by_code_use_case = Arc::new(GetProductByCodeUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl { repository, logger });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_code_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            product_api,
        }
    }
}
