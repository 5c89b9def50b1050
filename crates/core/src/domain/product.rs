use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    /// Strict parse: only ASCII digits, so `"12abc"`, `" 12"` and `"+12"` are rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidProductId(value.to_string());
        if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        value.parse::<u64>().map(Self).map_err(|_| invalid())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: Decimal,
    pub count: u32,
}

impl Rating {
    pub const MAX_STARS: usize = 5;

    /// Number of filled stars in a five-star bar, `floor(rate)` clamped to 0..=5.
    pub fn filled_stars(&self) -> usize {
        self.rate.floor().to_usize().unwrap_or(0).min(Self::MAX_STARS)
    }
}

/// Catalog record as returned by the product API. Never mutated after first sight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}
