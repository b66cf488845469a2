use std::sync::Arc;

use poem::error::InternalServerError;
use poem::web::{Data, Html, Path, Redirect};
use poem::{Result, Route, get, handler, post};

use business::application::product_list::view::ProductListView;
use business::domain::product::value_objects::ProductId;

use super::templates::render_screen;

/// Page routes. The view is expected as shared data on the endpoint.
pub fn routes() -> Route {
    Route::new()
        .at("/", get(show_product_list))
        .at("/products/:id/delete", post(delete_product))
}

/// Renders the current state of the product list.
#[handler]
async fn show_product_list(Data(view): Data<&Arc<ProductListView>>) -> Result<Html<String>> {
    let screen = view.render().await;
    let html = render_screen(&screen).map_err(InternalServerError)?;
    Ok(Html(html))
}

/// Delete control of a card. Failures end up in the page's error slot, so
/// the browser is always sent back to the list.
#[handler]
async fn delete_product(
    Path(id): Path<String>,
    Data(view): Data<&Arc<ProductListView>>,
) -> Redirect {
    view.delete(ProductId::new(id)).await;
    Redirect::see_other("/")
}
