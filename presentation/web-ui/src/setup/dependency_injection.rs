use std::sync::Arc;

use logger::TracingLogger;

use rest_client::client::ProductApiClient;
use rest_client::product_service::ProductServiceRest;

use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product_list::view::ProductListView;

use crate::config::product_api_config::ProductApiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_list_view: Arc<ProductListView>,
}

impl DependencyContainer {
    pub fn new(config: &ProductApiConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let client = ProductApiClient::new(&config.base_url, config.timeout)?;
        let product_service = Arc::new(ProductServiceRest::new(client));

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            service: product_service.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            service: product_service,
            logger: logger.clone(),
        });

        // The view starts in its loading state; the server kicks off the load.
        let product_list_view = Arc::new(ProductListView::new(
            get_all_use_case,
            delete_use_case,
            logger,
        ));

        Ok(Self {
            health_api,
            product_list_view,
        })
    }
}
