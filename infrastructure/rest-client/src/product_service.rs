use async_trait::async_trait;

use business::domain::errors::ServiceError;
use business::domain::product::model::Product;
use business::domain::product::services::ProductService;
use business::domain::product::value_objects::ProductId;

use crate::client::ProductApiClient;
use crate::dto::ProductDto;

/// `ProductService` backed by the product REST API.
pub struct ProductServiceRest {
    client: ProductApiClient,
}

impl ProductServiceRest {
    pub fn new(client: ProductApiClient) -> Self {
        Self { client }
    }

    fn decode_products(body: &[u8]) -> Result<Vec<Product>, ServiceError> {
        let dtos: Vec<ProductDto> =
            serde_json::from_slice(body).map_err(|e| ServiceError::decode(e.to_string()))?;
        Ok(dtos.into_iter().map(ProductDto::into_domain).collect())
    }
}

#[async_trait]
impl ProductService for ProductServiceRest {
    async fn get_all(&self) -> Result<Vec<Product>, ServiceError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        Self::decode_products(&body)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ServiceError> {
        let response = self
            .client
            .client
            .delete(self.client.product_url(id))
            .send()
            .await
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::status(status.as_u16()));
        }

        Ok(())
    }
}
