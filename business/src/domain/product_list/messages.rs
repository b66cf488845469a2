//! User-facing strings of the product list page.

pub const PAGE_TITLE: &str = "Simple Card List";
pub const LOADING: &str = "Loading products...";
pub const EMPTY: &str = "No products available.";
pub const LOAD_FAILED: &str = "Failed to load products";
pub const DELETE_FAILED: &str = "Failed to delete product";
