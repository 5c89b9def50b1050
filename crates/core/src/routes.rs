use std::fmt;

use crate::domain::product::ProductId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    ProductList,
    Cart,
    ProductDetail(ProductId),
    NotFound,
}

impl Route {
    /// Resolves a request path. Query strings and a trailing slash are ignored;
    /// a product id must be a plain unsigned integer.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Self::ProductList,
            "/cart" => Self::Cart,
            _ => match trimmed.strip_prefix("/product/") {
                Some(raw_id) if !raw_id.contains('/') => Self::product_detail(raw_id),
                _ => Self::NotFound,
            },
        }
    }

    pub fn product_detail(raw_id: &str) -> Self {
        raw_id.parse::<ProductId>().map(Self::ProductDetail).unwrap_or(Self::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductList => write!(f, "/"),
            Self::Cart => write!(f, "/cart"),
            Self::ProductDetail(id) => write!(f, "/product/{id}"),
            Self::NotFound => write!(f, "/not-found"),
        }
    }
}
