// ── Container type domain type ──

use serde::{Deserialize, Serialize};

use super::Keyed;
use super::product::ProductType;

/// A template defining capacity, measurement unit, and the product
/// types permitted in containers of this kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerType {
    pub id: i64,
    pub name: String,
    /// Capacity ceiling; greater than zero when present.
    pub volume: Option<f64>,
    pub unit_id: Option<i64>,
    /// Permitted product types. Empty means unrestricted -- the backend
    /// only constrains contents once associations are configured.
    pub allowed_product_types: Vec<ProductType>,
}

impl ContainerType {
    /// Ids of the permitted product types.
    pub fn allowed_product_type_ids(&self) -> Vec<i64> {
        self.allowed_product_types.iter().map(|pt| pt.id).collect()
    }

    /// Titles of the permitted product types, for display.
    pub fn allowed_product_type_titles(&self) -> Vec<String> {
        self.allowed_product_types
            .iter()
            .map(|pt| pt.title.clone())
            .collect()
    }
}

impl Keyed for ContainerType {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Form input for creating or updating a container type.
#[derive(Debug, Clone, Default)]
pub struct ContainerTypeInput {
    pub name: String,
    pub volume: f64,
    pub unit_id: Option<i64>,
    pub product_type_ids: Vec<i64>,
}
