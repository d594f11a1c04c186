// Wire DTOs for the inventory service.
//
// The backend is inconsistent about response casing (`id` vs `Id`,
// `name` vs `Name`) across resources and deployments. Each resource gets
// exactly one strict DTO here; the PascalCase spellings are resolved via
// serde aliases at this boundary so nothing downstream ever touches an
// ambiguous optional field.
//
// Request bodies reproduce the casing each endpoint actually expects:
// containers, users, and auth take camelCase; container-types, products,
// product-types, and units take PascalCase.

use serde::{Deserialize, Serialize};

// ── Containers ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDto {
    #[serde(alias = "Id")]
    pub id: i64,
    /// Server-assigned display code.
    #[serde(default, alias = "Code")]
    pub code: Option<String>,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "TypeId", alias = "containerTypeId", alias = "ContainerTypeId")]
    pub type_id: i64,
    #[serde(default, alias = "ProductId")]
    pub product_id: Option<i64>,
    #[serde(default, alias = "Quantity")]
    pub quantity: Option<f64>,
    #[serde(default, alias = "UnitId")]
    pub unit_id: Option<i64>,
    #[serde(default, alias = "Notes")]
    pub notes: Option<String>,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
}

/// POST `/containers` body. `None` fields serialize as explicit nulls,
/// which is what the endpoint expects for "no product" / "no quantity".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerCreate {
    pub name: String,
    pub type_id: i64,
    pub product_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit_id: Option<i64>,
    pub notes: Option<String>,
}

/// PUT `/containers` body -- the id travels in the body, not the path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerUpdate {
    pub id: i64,
    pub name: String,
    pub type_id: i64,
    pub product_id: Option<i64>,
    pub quantity: Option<f64>,
    pub unit_id: Option<i64>,
    pub notes: Option<String>,
}

// ── Container types ─────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTypeDto {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Volume")]
    pub volume: Option<f64>,
    #[serde(default, alias = "UnitId")]
    pub unit_id: Option<i64>,
    /// Association rows linking this type to its permitted product types.
    #[serde(default, alias = "ProductTypes")]
    pub product_types: Vec<ProductTypeLinkDto>,
}

/// Join-table row inside a container type response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeLinkDto {
    #[serde(default, alias = "ProductType")]
    pub product_type: Option<ProductTypeDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerTypeCreate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Volume")]
    pub volume: f64,
    #[serde(rename = "UnitId")]
    pub unit_id: i64,
    #[serde(rename = "ProductTypeIds")]
    pub product_type_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerTypeUpdate {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Volume")]
    pub volume: f64,
    #[serde(rename = "UnitId")]
    pub unit_id: i64,
    #[serde(rename = "ProductTypeIds")]
    pub product_type_ids: Vec<i64>,
}

// ── Products ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name", alias = "title", alias = "Title")]
    pub name: Option<String>,
    #[serde(
        alias = "TypeId",
        alias = "productTypeId",
        alias = "ProductTypeId",
        default
    )]
    pub type_id: Option<i64>,
    /// Production date as the backend sends it; parsed at the domain
    /// boundary since the serialization format varies by deployment.
    #[serde(default, alias = "Produced")]
    pub produced: Option<String>,
    #[serde(default, alias = "ExpirationDate")]
    pub expiration_date: Option<String>,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCreate {
    #[serde(rename = "TypeId")]
    pub type_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Produced")]
    pub produced: Option<String>,
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductUpdate {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "TypeId")]
    pub type_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Produced")]
    pub produced: Option<String>,
    #[serde(rename = "ExpirationDate")]
    pub expiration_date: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

// ── Product types ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeDto {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Title", alias = "name", alias = "Name")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductTypeCreate {
    #[serde(rename = "Title")]
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductTypeUpdate {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
}

// ── Units ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDto {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Title", alias = "name", alias = "Name")]
    pub title: Option<String>,
    /// 0 = Default, 1 = Mass, 2 = Capacity.
    #[serde(default, alias = "UnitType")]
    pub unit_type: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitCreate {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "UnitType")]
    pub unit_type: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitUpdate {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "UnitType")]
    pub unit_type: u8,
}

// ── Users & roles ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Surname")]
    pub surname: Option<String>,
    #[serde(default, alias = "FathersName")]
    pub fathers_name: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(default, alias = "RoleId")]
    pub role_id: Option<i64>,
    #[serde(default, alias = "Confirmed", alias = "isConfirmed", alias = "IsConfirmed")]
    pub confirmed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub surname: String,
    pub fathers_name: Option<String>,
    pub role_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub fathers_name: Option<String>,
    pub role_id: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(default, alias = "Name", alias = "title", alias = "Title")]
    pub name: Option<String>,
}

// ── Container history ───────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecordDto {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "ContainerId")]
    pub container_id: i64,
    #[serde(default, alias = "ProductId")]
    pub product_id: Option<i64>,
    #[serde(default, alias = "ActionType")]
    pub action_type: Option<String>,
    #[serde(default, alias = "ActionDate")]
    pub action_date: Option<String>,
    #[serde(default, alias = "Notes")]
    pub notes: Option<String>,
    #[serde(default, alias = "CreatedAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "UpdatedAt")]
    pub updated_at: Option<String>,
}

// ── Auth ────────────────────────────────────────────────────────────

/// Body for `/auth/register` and `/auth/login` -- both take a
/// third-party identity token and exchange it for a service token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    pub id_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(alias = "Token", alias = "accessToken")]
    pub token: String,
}
