use url::Url;

use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

use super::messages;
use super::state::ProductListState;

/// What the product list page shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading { message: &'static str },
    Ready(Page),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: &'static str,
    pub error: Option<String>,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    /// Carries the empty-list message.
    Empty(&'static str),
    Cards(Vec<ProductCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// Target of the card's delete control.
    pub product_id: ProductId,
    /// Page path the card's delete control posts to, with the id encoded as
    /// a single path segment.
    pub delete_path: String,
    pub image: Option<CardImage>,
    pub name: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    pub url: String,
    pub alt: String,
}

impl Screen {
    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading { .. })
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            Screen::Ready(Page {
                body: PageBody::Cards(cards),
                ..
            }) => cards,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Screen::Ready(page) => page.error.as_deref(),
            Screen::Loading { .. } => None,
        }
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(
            self,
            Screen::Ready(Page {
                body: PageBody::Empty(_),
                ..
            })
        )
    }
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            delete_path: delete_path(&product.id),
            image: product.image_url.as_ref().map(|url| CardImage {
                url: url.clone(),
                alt: product.name.clone(),
            }),
            name: product.name.clone(),
            price: product.price_label(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

fn delete_path(id: &ProductId) -> String {
    let mut url = match Url::parse("http://localhost/products") {
        Ok(url) => url,
        Err(_) => return format!("/products/{}/delete", id),
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.push(id.as_str()).push("delete");
    }
    url.path().to_string()
}

/// Pure projection of the view state onto what gets drawn.
///
/// Loading wins over everything else, including a stale error.
pub fn render(state: &ProductListState) -> Screen {
    if state.is_loading() {
        return Screen::Loading {
            message: messages::LOADING,
        };
    }

    let body = if state.products().is_empty() {
        PageBody::Empty(messages::EMPTY)
    } else {
        PageBody::Cards(state.products().iter().map(ProductCard::from).collect())
    };

    Screen::Ready(Page {
        title: messages::PAGE_TITLE,
        error: state.error().map(str::to_string),
        body,
    })
}
