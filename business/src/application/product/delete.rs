use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::services::ProductService;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub service: Arc<dyn ProductService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.service.delete(&params.id).await.map_err(|e| {
            if e.is_not_found() {
                ProductError::NotFound
            } else {
                ProductError::Service(e)
            }
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ServiceError;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductApi {}

        #[async_trait]
        impl ProductService for ProductApi {
            async fn get_all(&self) -> Result<Vec<Product>, ServiceError>;
            async fn delete(&self, id: &ProductId) -> Result<(), ServiceError>;
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
    async fn should_delete_product_by_id() {
        let mut mock_service = MockProductApi::new();
        mock_service
            .expect_delete()
            .with(eq(ProductId::new("7")))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            service: Arc::new(mock_service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new("7"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_service_answers_404() {
        let mut mock_service = MockProductApi::new();
        mock_service
            .expect_delete()
            .returning(|_| Err(ServiceError::status(404)));

        let use_case = DeleteProductUseCaseImpl {
            service: Arc::new(mock_service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new("missing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_wrap_transport_failure() {
        let mut mock_service = MockProductApi::new();
        mock_service
            .expect_delete()
            .returning(|_| Err(ServiceError::transport("connection reset")));

        let use_case = DeleteProductUseCaseImpl {
            service: Arc::new(mock_service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new("7"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Service(ServiceError::Transport(_))
        ));
    }
}
