// ── Product domain types ──

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Keyed;

/// A classification for products (wine, cider, vinegar, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub title: String,
}

impl Keyed for ProductType {
    fn key(&self) -> i64 {
        self.id
    }
}

/// A trackable good that may be stored inside containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub type_id: Option<i64>,
    pub description: Option<String>,
    pub produced: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
}

impl Product {
    /// Whether the product is past its expiration date on `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|d| d < today)
    }
}

impl Keyed for Product {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Form input for creating or updating a product.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub name: String,
    pub type_id: i64,
    pub description: Option<String>,
    pub produced: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn expiry_is_strictly_before_today() {
        let product = Product {
            id: 1,
            name: "cider".into(),
            type_id: Some(2),
            description: None,
            produced: Some(date(2024, 1, 10)),
            expiration_date: Some(date(2024, 6, 1)),
        };
        assert!(product.is_expired(date(2024, 6, 2)));
        assert!(!product.is_expired(date(2024, 6, 1)));
        assert!(!product.is_expired(date(2024, 5, 31)));
    }

    #[test]
    fn no_expiration_date_never_expires() {
        let product = Product {
            id: 1,
            name: "brine".into(),
            type_id: None,
            description: None,
            produced: None,
            expiration_date: None,
        };
        assert!(!product.is_expired(date(2030, 1, 1)));
    }
}
