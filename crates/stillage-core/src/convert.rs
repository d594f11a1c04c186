// ── API-to-domain type conversions ──
//
// Bridges raw `stillage_api` wire DTOs into canonical domain types, and
// domain form inputs back into request bodies. Each `From` impl
// normalizes field names, parses date strings into strong types, and
// fills sensible defaults for missing optional data. This is the single
// normalization boundary -- nothing past it touches wire casing or
// string-typed dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use stillage_api::types as wire;

use crate::model::{
    Container, ContainerInput, ContainerStatus, ContainerType, ContainerTypeInput, HistoryRecord,
    Product, ProductInput, ProductType, Role, Unit, UnitKind, User, UserInput,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a wire date that may arrive as a bare date or a full
/// datetime, depending on the deployment.
fn parse_date(raw: Option<&String>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.date())
                .ok()
        })
}

/// Parse a wire timestamp; naive timestamps are taken as UTC.
fn parse_datetime(raw: Option<&String>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.and_utc())
                .ok()
        })
}

/// Serialize a domain date for the wire.
fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

// ── Containers ─────────────────────────────────────────────────────

impl From<wire::ContainerDto> for Container {
    fn from(dto: wire::ContainerDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            name: dto.name.unwrap_or_default(),
            type_id: dto.type_id,
            product_id: dto.product_id,
            quantity: dto.quantity,
            unit_id: dto.unit_id,
            notes: dto.notes,
            status: ContainerStatus::from_wire(dto.status.as_deref()),
        }
    }
}

pub(crate) fn container_create(input: &ContainerInput) -> wire::ContainerCreate {
    wire::ContainerCreate {
        name: input.name.clone(),
        type_id: input.type_id,
        product_id: input.product_id,
        quantity: input.quantity,
        unit_id: input.unit_id,
        notes: input.notes.clone(),
    }
}

pub(crate) fn container_update(id: i64, input: &ContainerInput) -> wire::ContainerUpdate {
    wire::ContainerUpdate {
        id,
        name: input.name.clone(),
        type_id: input.type_id,
        product_id: input.product_id,
        quantity: input.quantity,
        unit_id: input.unit_id,
        notes: input.notes.clone(),
    }
}

// ── Container types ────────────────────────────────────────────────

impl From<wire::ContainerTypeDto> for ContainerType {
    fn from(dto: wire::ContainerTypeDto) -> Self {
        // Flatten the join-table rows; rows with no nested product type
        // (deleted types) are dropped.
        let allowed_product_types = dto
            .product_types
            .into_iter()
            .filter_map(|link| link.product_type)
            .map(ProductType::from)
            .collect();

        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            volume: dto.volume.filter(|v| *v > 0.0),
            unit_id: dto.unit_id,
            allowed_product_types,
        }
    }
}

pub(crate) fn container_type_create(
    input: &ContainerTypeInput,
    unit_id: i64,
) -> wire::ContainerTypeCreate {
    wire::ContainerTypeCreate {
        name: input.name.clone(),
        volume: input.volume,
        unit_id,
        product_type_ids: input.product_type_ids.clone(),
    }
}

pub(crate) fn container_type_update(
    id: i64,
    input: &ContainerTypeInput,
    unit_id: i64,
) -> wire::ContainerTypeUpdate {
    wire::ContainerTypeUpdate {
        id,
        name: input.name.clone(),
        volume: input.volume,
        unit_id,
        product_type_ids: input.product_type_ids.clone(),
    }
}

// ── Products ───────────────────────────────────────────────────────

impl From<wire::ProductDto> for Product {
    fn from(dto: wire::ProductDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            type_id: dto.type_id,
            description: dto.description,
            produced: parse_date(dto.produced.as_ref()),
            expiration_date: parse_date(dto.expiration_date.as_ref()),
        }
    }
}

impl From<wire::ProductTypeDto> for ProductType {
    fn from(dto: wire::ProductTypeDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title.unwrap_or_default(),
        }
    }
}

pub(crate) fn product_create(input: &ProductInput) -> wire::ProductCreate {
    wire::ProductCreate {
        type_id: input.type_id,
        name: input.name.clone(),
        produced: format_date(input.produced),
        expiration_date: format_date(input.expiration_date),
        description: input.description.clone(),
    }
}

pub(crate) fn product_update(id: i64, input: &ProductInput) -> wire::ProductUpdate {
    wire::ProductUpdate {
        id,
        type_id: input.type_id,
        name: input.name.clone(),
        produced: format_date(input.produced),
        expiration_date: format_date(input.expiration_date),
        description: input.description.clone(),
    }
}

// ── Units ──────────────────────────────────────────────────────────

impl From<wire::UnitDto> for Unit {
    fn from(dto: wire::UnitDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title.unwrap_or_default(),
            kind: UnitKind::from_code(dto.unit_type),
        }
    }
}

// ── Users & roles ──────────────────────────────────────────────────

impl From<wire::UserDto> for User {
    fn from(dto: wire::UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            surname: dto.surname.unwrap_or_default(),
            fathers_name: dto.fathers_name.filter(|s| !s.trim().is_empty()),
            email: dto.email.unwrap_or_default(),
            role_id: dto.role_id,
            confirmed: dto.confirmed,
        }
    }
}

impl From<wire::RoleDto> for Role {
    fn from(dto: wire::RoleDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
        }
    }
}

pub(crate) fn user_create(input: &UserInput) -> wire::UserCreate {
    wire::UserCreate {
        email: input.email.clone(),
        name: input.name.clone(),
        surname: input.surname.clone(),
        fathers_name: input.fathers_name.clone(),
        role_id: input.role_id,
    }
}

pub(crate) fn user_update(id: i64, input: &UserInput) -> wire::UserUpdate {
    wire::UserUpdate {
        id,
        email: input.email.clone(),
        name: input.name.clone(),
        surname: input.surname.clone(),
        fathers_name: input.fathers_name.clone(),
        role_id: input.role_id,
    }
}

// ── Container history ──────────────────────────────────────────────

impl From<wire::HistoryRecordDto> for HistoryRecord {
    fn from(dto: wire::HistoryRecordDto) -> Self {
        Self {
            id: dto.id,
            container_id: dto.container_id,
            product_id: dto.product_id,
            action_type: dto.action_type.unwrap_or_default(),
            action_date: parse_datetime(dto.action_date.as_ref()),
            notes: dto.notes,
            created_at: parse_datetime(dto.created_at.as_ref()),
            updated_at: parse_datetime(dto.updated_at.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_bare_and_datetime_forms() {
        let bare = Some("2024-06-15".to_owned());
        let stamped = Some("2024-06-15T10:30:00Z".to_owned());
        let naive = Some("2024-06-15T10:30:00".to_owned());
        let expected = NaiveDate::from_ymd_opt(2024, 6, 15);

        assert_eq!(parse_date(bare.as_ref()), expected);
        assert_eq!(parse_date(stamped.as_ref()), expected);
        assert_eq!(parse_date(naive.as_ref()), expected);
        assert_eq!(parse_date(Some(&String::new())), None);
        assert_eq!(parse_date(Some(&"garbage".to_owned())), None);
    }

    #[test]
    fn naive_timestamps_are_taken_as_utc() {
        let raw = Some("2024-06-15T10:30:00".to_owned());
        let parsed = parse_datetime(raw.as_ref()).expect("parses");
        assert_eq!(parsed.to_rfc3339(), "2024-06-15T10:30:00+00:00");
    }

    #[test]
    fn container_type_flattens_association_rows() {
        let dto = wire::ContainerTypeDto {
            id: 3,
            name: Some("vat".into()),
            volume: Some(500.0),
            unit_id: Some(1),
            product_types: vec![
                wire::ProductTypeLinkDto {
                    product_type: Some(wire::ProductTypeDto {
                        id: 2,
                        title: Some("wine".into()),
                    }),
                },
                wire::ProductTypeLinkDto { product_type: None },
            ],
        };

        let ct = ContainerType::from(dto);
        assert_eq!(ct.allowed_product_type_ids(), vec![2]);
        assert_eq!(ct.allowed_product_type_titles(), vec!["wine".to_owned()]);
    }

    #[test]
    fn non_positive_volume_is_dropped() {
        let dto = wire::ContainerTypeDto {
            id: 1,
            name: Some("broken".into()),
            volume: Some(0.0),
            unit_id: None,
            product_types: Vec::new(),
        };
        assert_eq!(ContainerType::from(dto).volume, None);
    }
}
