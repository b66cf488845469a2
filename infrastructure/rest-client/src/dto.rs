use serde::Deserialize;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// Wire shape of a product as returned by `GET /api/products`.
///
/// Required fields are enforced by serde; unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductIdDto,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductIdDto {
    Text(String),
    Number(serde_json::Number),
}

impl From<ProductIdDto> for ProductId {
    fn from(dto: ProductIdDto) -> Self {
        match dto {
            ProductIdDto::Text(id) => ProductId::new(id),
            ProductIdDto::Number(id) => ProductId::new(id.to_string()),
        }
    }
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        let mut product = Product::new(self.id, self.name, self.price);
        product.description = self.description;
        if let Some(image_url) = self.image_url {
            product = product.with_image_url(image_url);
        }
        product
    }
}
