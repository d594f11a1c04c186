//! Domain model and view-state layer between `stillage-api` and the
//! presentation layer (CLI).
//!
//! This crate owns the business logic of the inventory client:
//!
//! - **[`Inventory`]** — Controller facade owning the API client and
//!   one transient [`ResourceList`] per resource. Reads run the
//!   Idle → Loading → Ready/Error machine; successful writes merge the
//!   server's returned representation into the local list instead of
//!   refetching; failed writes leave it untouched.
//!
//! - **[`view`]** — The generalized list view-state every resource
//!   screen repeats: case-insensitive search over per-resource fields,
//!   a tri-state sort toggle, clamped pagination, and the page-number
//!   strip with ellipsis collapsing.
//!
//! - **[`select`]** — Dependent-selection constraints: the capacity
//!   ceiling and unit label derived from a container type, product
//!   filtering by allowed product types, stale-selection clearing, and
//!   the pre-request form validation messages.
//!
//! - **Domain model** ([`model`]) — Canonical types (`Container`,
//!   `ContainerType`, `Product`, `Unit`, `User`, `HistoryRecord`, ...)
//!   normalized once from the wire DTOs in [`convert`].

pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod select;
pub mod store;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use controller::Inventory;
pub use error::CoreError;
pub use select::{
    TypeConstraints, validate_container, validate_container_type, validate_product, validate_user,
};
pub use store::{LoadPhase, ResourceList};
pub use view::{ListEntry, ListView, PageItem, PageView, SortOrder, page_size_for_width};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Container,
    ContainerInput,
    ContainerStatus,
    ContainerType,
    ContainerTypeInput,
    HistoryRecord,
    Keyed,
    Product,
    ProductInput,
    ProductType,
    Role,
    Unit,
    UnitKind,
    User,
    UserInput,
};
