use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::domain::logger::Logger;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::product::value_objects::ProductId;
use crate::domain::product_list::screen::{Screen, render};
use crate::domain::product_list::state::ProductListState;

/// The product list view: owns the view state and drives the loader and
/// deleter against the product use cases.
///
/// Failures never leave the view. They are logged with their cause and
/// surfaced through the state's single error slot. The state lock is never
/// held across a service call, so deletes for different products run
/// independently of each other.
pub struct ProductListView {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    logger: Arc<dyn Logger>,
    state: RwLock<ProductListState>,
    load_started: AtomicBool,
    mounted: AtomicBool,
}

impl ProductListView {
    /// Creates a mounted view in its loading state. Nothing is fetched until
    /// [`ProductListView::load`] runs.
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            get_all_use_case,
            delete_use_case,
            logger,
            state: RwLock::new(ProductListState::new()),
            load_started: AtomicBool::new(false),
            mounted: AtomicBool::new(true),
        }
    }

    /// Creates the view and awaits its initial load before handing it out.
    pub async fn mount(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let view = Self::new(get_all_use_case, delete_use_case, logger);
        view.load().await;
        view
    }

    /// Runs the loader. Only the first call per view fetches anything; the
    /// return value tells whether this call was that one.
    pub async fn load(&self) -> bool {
        if self.load_started.swap(true, Ordering::SeqCst) {
            self.logger.debug("Product list already loaded, skipping");
            return false;
        }

        let result = self.get_all_use_case.execute().await;

        if !self.is_mounted() {
            self.logger
                .debug("Product list unmounted before load completed, discarding result");
            return true;
        }

        let mut state = self.state.write().await;
        match result {
            Ok(products) => state.load_succeeded(products),
            Err(err) => {
                self.logger.error(&format!("Failed to load products: {}", err));
                state.load_failed();
            }
        }
        true
    }

    /// Runs the deleter for one product. The entry only disappears once the
    /// service confirmed the deletion.
    pub async fn delete(&self, id: ProductId) {
        let result = self
            .delete_use_case
            .execute(DeleteProductParams { id: id.clone() })
            .await;

        if !self.is_mounted() {
            self.logger.debug(&format!(
                "Product list unmounted before deletion of {} completed, discarding result",
                id
            ));
            return;
        }

        let mut state = self.state.write().await;
        match result {
            Ok(()) => state.delete_succeeded(&id),
            Err(err) => {
                self.logger
                    .error(&format!("Failed to delete product {}: {}", id, err));
                state.delete_failed();
            }
        }
    }

    /// Detaches the view. Completions arriving afterwards are dropped.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub async fn state(&self) -> ProductListState {
        self.state.read().await.clone()
    }

    pub async fn render(&self) -> Screen {
        render(&*self.state.read().await)
    }
}
