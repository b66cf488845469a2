use askama::Template;

use business::domain::product_list::screen::{Page, PageBody, Screen};

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate<'a> {
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "product_list.html")]
pub struct ProductListTemplate<'a> {
    pub page: &'a Page,
}

/// Turns a rendered screen into the HTML document sent to the browser.
pub fn render_screen(screen: &Screen) -> askama::Result<String> {
    match screen {
        Screen::Loading { message } => LoadingTemplate { message }.render(),
        Screen::Ready(page) => ProductListTemplate { page }.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::Product;
    use business::domain::product_list::screen::render;
    use business::domain::product_list::state::ProductListState;

    fn loaded(products: Vec<Product>) -> ProductListState {
        let mut state = ProductListState::new();
        state.load_succeeded(products);
        state
    }

    #[test]
    fn should_render_loading_page_without_list() {
        let html = render_screen(&render(&ProductListState::new())).unwrap();

        assert!(html.contains("Loading products..."));
        assert!(!html.contains("Simple Card List"));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn should_render_cards_with_delete_controls() {
        let state = loaded(vec![
            Product::new("1", "Chair", 45.0)
                .with_description("Oak chair")
                .with_image_url("http://img/chair.png"),
            Product::new("2", "Desk", 120.5),
        ]);

        let html = render_screen(&render(&state)).unwrap();

        assert!(html.contains("Simple Card List"));
        assert_eq!(html.matches("class=\"card\"").count(), 2);
        assert!(html.contains("action=\"/products/1/delete\""));
        assert!(html.contains("action=\"/products/2/delete\""));
        assert!(html.contains("$45"));
        assert!(html.contains("$120.5"));
        assert!(html.contains("Oak chair"));
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains("alt=\"Chair\""));
        assert!(!html.contains("No products available."));
    }

    #[test]
    fn should_render_empty_message_and_error() {
        let mut state = ProductListState::new();
        state.load_failed();

        let html = render_screen(&render(&state)).unwrap();

        assert!(html.contains("Failed to load products"));
        assert!(html.contains("No products available."));
        assert!(!html.contains("class=\"card\""));
    }

    #[test]
    fn should_not_render_error_block_without_error() {
        let html = render_screen(&render(&loaded(Vec::new()))).unwrap();

        assert!(!html.contains("class=\"error\""));
        assert!(html.contains("No products available."));
    }

    #[test]
    fn should_escape_product_text() {
        let state = loaded(vec![Product::new("1", "<script>alert(1)</script>", 1.0)]);

        let html = render_screen(&render(&state)).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&#60;script&#62;alert(1)&#60;/script&#62;"));
    }
}
