// ── Dependent-selection constraints & form validation ──
//
// The container form derives everything from the selected container
// type: the capacity ceiling, its unit label, and which products may be
// chosen. When the type changes, a product selection that is no longer
// permitted is cleared rather than submitted.
//
// Validation runs before any network call; the message strings are part
// of the contract with the presentation layer.

use crate::error::CoreError;
use crate::model::{Container, ContainerInput, ContainerType, ContainerTypeInput, Product, Unit};

/// Constraints derived from a selected container type.
#[derive(Debug, Clone, Default)]
pub struct TypeConstraints {
    /// Capacity ceiling, when the type defines one.
    pub capacity: Option<f64>,
    /// Display label of the type's unit (e.g. "liters").
    pub unit_label: Option<String>,
    /// The type's unit id, denormalized onto containers at submit.
    pub unit_id: Option<i64>,
    /// Permitted product-type ids. Empty means unrestricted.
    pub allowed_product_type_ids: Vec<i64>,
}

impl TypeConstraints {
    /// Derive constraints from a container type, resolving the unit
    /// label through the units list.
    pub fn for_type(container_type: &ContainerType, units: &[Unit]) -> Self {
        let unit = container_type
            .unit_id
            .and_then(|uid| units.iter().find(|u| u.id == uid));
        Self {
            capacity: container_type.volume,
            unit_label: unit.map(|u| u.title.clone()),
            unit_id: container_type.unit_id,
            allowed_product_type_ids: container_type.allowed_product_type_ids(),
        }
    }

    /// Whether a product's type is permitted. An empty allowed set
    /// means the type carries no restriction.
    pub fn allows(&self, product: &Product) -> bool {
        if self.allowed_product_type_ids.is_empty() {
            return true;
        }
        product
            .type_id
            .is_some_and(|tid| self.allowed_product_type_ids.contains(&tid))
    }

    /// The product choices offered for this type.
    pub fn filter_products<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.allows(p)).collect()
    }

    /// Re-validate an existing product selection after the parent type
    /// changed: a selection that is missing or no longer permitted is
    /// cleared.
    pub fn revalidate_selection(
        &self,
        products: &[Product],
        selected: Option<i64>,
    ) -> Option<i64> {
        let id = selected?;
        let product = products.iter().find(|p| p.id == id)?;
        self.allows(product).then_some(id)
    }
}

// ── Submit-time validation ─────────────────────────────────────────

/// Validate a container form against its type constraints. Runs
/// entirely locally, before any request is issued.
pub fn validate_container(
    input: &ContainerInput,
    constraints: Option<&TypeConstraints>,
) -> Result<(), CoreError> {
    if input.name.trim().is_empty() {
        return Err(CoreError::validation("Enter container name."));
    }
    if input.type_id <= 0 {
        return Err(CoreError::validation("Select container type."));
    }

    let quantity = input.quantity.unwrap_or(0.0);
    if quantity.is_nan() || quantity < 0.0 {
        return Err(CoreError::validation("Quantity must be >= 0."));
    }

    if let Some(constraints) = constraints {
        if let Some(capacity) = constraints.capacity {
            if quantity > capacity {
                let unit = constraints.unit_label.as_deref().unwrap_or_default();
                return Err(CoreError::validation(format!(
                    "Quantity cannot be bigger than capacity ({capacity} {unit})."
                )));
            }
        }
    }

    Ok(())
}

/// Validate a container-type form.
pub fn validate_container_type(input: &ContainerTypeInput) -> Result<(), CoreError> {
    if input.name.trim().is_empty() {
        return Err(CoreError::validation("Enter type name."));
    }
    if input.unit_id.is_none() {
        return Err(CoreError::validation("Select unit."));
    }
    if input.volume.is_nan() || input.volume <= 0.0 {
        return Err(CoreError::validation("Volume must be > 0."));
    }
    Ok(())
}

/// Validate a product form.
pub fn validate_product(input: &crate::model::ProductInput) -> Result<(), CoreError> {
    if input.name.trim().is_empty() {
        return Err(CoreError::validation("Enter product name."));
    }
    if input.type_id <= 0 {
        return Err(CoreError::validation("Select product type."));
    }
    if let (Some(produced), Some(expires)) = (input.produced, input.expiration_date) {
        if expires < produced {
            return Err(CoreError::validation(
                "Expiration date cannot be before production date.",
            ));
        }
    }
    Ok(())
}

/// Validate a user form (admin create/update).
pub fn validate_user(input: &crate::model::UserInput) -> Result<(), CoreError> {
    if input.email.trim().is_empty() {
        return Err(CoreError::validation("Enter email."));
    }
    if input.name.trim().is_empty() {
        return Err(CoreError::validation("Enter name."));
    }
    if input.surname.trim().is_empty() {
        return Err(CoreError::validation("Enter surname."));
    }
    if input.role_id <= 0 {
        return Err(CoreError::validation("Select role."));
    }
    Ok(())
}

/// Check a stored container against its type's constraints -- used to
/// flag records that drifted server-side (type edited after the fill).
pub fn container_violations(
    container: &Container,
    constraints: &TypeConstraints,
    products: &[Product],
) -> Vec<String> {
    let mut violations = Vec::new();

    if let (Some(quantity), Some(capacity)) = (container.quantity, constraints.capacity) {
        if quantity > capacity {
            violations.push(format!(
                "quantity {quantity} exceeds capacity {capacity}"
            ));
        }
    }

    if let Some(pid) = container.product_id {
        if let Some(product) = products.iter().find(|p| p.id == pid) {
            if !constraints.allows(product) {
                violations.push(format!(
                    "product '{}' is not permitted by the container type",
                    product.name
                ));
            }
        }
    }

    violations
}
