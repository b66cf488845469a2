use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::messages;

/// In-memory state behind the product list page.
///
/// `products` mirrors the last successful load minus every id whose deletion
/// the service confirmed since. `loading` is only ever true before the first
/// load settles.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListState {
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListState {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn load_succeeded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.error = None;
        self.loading = false;
    }

    /// Products stay as they were (empty on the first load).
    pub fn load_failed(&mut self) {
        self.error = Some(messages::LOAD_FAILED.to_string());
        self.loading = false;
    }

    /// Removes the entry with `id`, keeping the order of the rest, and clears
    /// any earlier error. Unknown ids leave the list untouched.
    pub fn delete_succeeded(&mut self, id: &ProductId) {
        self.products.retain(|product| &product.id != id);
        self.error = None;
    }

    pub fn delete_failed(&mut self) {
        self.error = Some(messages::DELETE_FAILED.to_string());
    }
}
