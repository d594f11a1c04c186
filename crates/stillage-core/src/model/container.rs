// ── Container domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Keyed;

/// Lifecycle status of a container.
///
/// The wire value is a string; anything unrecognized normalizes to
/// [`Default`](Self::Default).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ContainerStatus {
    #[default]
    Default,
    Active,
    Inactive,
    Maintenance,
    Disposed,
}

impl ContainerStatus {
    /// Parse a wire status string, falling back to `Default`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

/// A physical storage unit (barrel, vat) tracked by code, type, and
/// current contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: i64,
    /// Server-assigned display code; absent on some deployments.
    pub code: Option<String>,
    pub name: String,
    pub type_id: i64,
    /// Product currently stored, if any.
    pub product_id: Option<i64>,
    /// Stored amount, in the unit denormalized from the type.
    pub quantity: Option<f64>,
    pub unit_id: Option<i64>,
    pub notes: Option<String>,
    pub status: ContainerStatus,
}

impl Keyed for Container {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Form input for creating or updating a container. Validated against
/// the selected type's constraints before it ever reaches the wire.
#[derive(Debug, Clone, Default)]
pub struct ContainerInput {
    pub name: String,
    pub type_id: i64,
    pub product_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit_id: Option<i64>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values_case_insensitively() {
        assert_eq!(
            ContainerStatus::from_wire(Some("active")),
            ContainerStatus::Active
        );
        assert_eq!(
            ContainerStatus::from_wire(Some("Maintenance")),
            ContainerStatus::Maintenance
        );
    }

    #[test]
    fn unknown_status_falls_back_to_default() {
        assert_eq!(
            ContainerStatus::from_wire(Some("Archived")),
            ContainerStatus::Default
        );
        assert_eq!(ContainerStatus::from_wire(None), ContainerStatus::Default);
    }
}
