//! Container-type command handlers.

use serde::Serialize;
use tabled::Tabled;

use stillage_core::{ContainerType, ContainerTypeInput, Inventory, ListEntry, Unit};

use crate::cli::{ContainerTypesArgs, ContainerTypesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Tabled)]
struct TypeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "Allowed products")]
    allowed: String,
}

impl TypeRow {
    fn build(ty: &ContainerType, units: &[Unit]) -> Self {
        let capacity = match ty.volume {
            Some(volume) => {
                let unit = ty
                    .unit_id
                    .and_then(|uid| units.iter().find(|u| u.id == uid));
                match unit {
                    Some(u) => format!("{volume} {}", u.title),
                    None => volume.to_string(),
                }
            }
            None => "-".to_owned(),
        };

        let titles = ty.allowed_product_type_titles();
        let allowed = if titles.is_empty() {
            "any".to_owned()
        } else {
            titles.join(", ")
        };

        Self {
            id: ty.id,
            name: ty.name.clone(),
            capacity,
            allowed,
        }
    }
}

impl ListEntry for TypeRow {
    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.allowed.clone()]
    }

    fn sort_key(&self) -> String {
        self.name.clone()
    }
}

fn detail(ty: &ContainerType) -> String {
    let titles = ty.allowed_product_type_titles();
    format!(
        "ID:              {}\nName:            {}\nVolume:          {}\nUnit:            {}\nAllowed types:   {}",
        ty.id,
        ty.name,
        ty.volume.map_or_else(|| "-".into(), |v| v.to_string()),
        ty.unit_id.map_or_else(|| "-".into(), |u| u.to_string()),
        if titles.is_empty() {
            "any".to_owned()
        } else {
            titles.join(", ")
        },
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inv: &mut Inventory,
    args: ContainerTypesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ContainerTypesCommand::List { list, unit } => {
            inv.refresh_units().await?;

            let types = if let Some(unit_id) = unit {
                let dtos = inv.client().list_container_types_by_unit(unit_id).await;
                dtos.map_err(stillage_core::CoreError::from)?
                    .into_iter()
                    .map(ContainerType::from)
                    .collect()
            } else {
                inv.refresh_container_types().await?;
                inv.container_types().items().to_vec()
            };

            let rows: Vec<TypeRow> = types
                .iter()
                .map(|t| TypeRow::build(t, inv.units().items()))
                .collect();
            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(global, &page, |r| (*r).clone(), |r| r.id.to_string());
            Ok(())
        }

        ContainerTypesCommand::Get { id, name } => {
            let ty: ContainerType = if let Some(name) = name {
                inv.client()
                    .get_container_type_by_name(&name)
                    .await
                    .map_err(stillage_core::CoreError::from)?
                    .into()
            } else {
                let Some(id) = id else {
                    return Err(CliError::validation("Provide an id or --name."));
                };
                inv.client()
                    .get_container_type(id)
                    .await
                    .map_err(stillage_core::CoreError::from)?
                    .into()
            };

            let out = output::render_single(&global.output, &ty, detail, |t| t.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ContainerTypesCommand::Create {
            name,
            volume,
            unit,
            product_types,
        } => {
            let created = inv
                .create_container_type(ContainerTypeInput {
                    name,
                    volume,
                    unit_id: Some(unit),
                    product_type_ids: product_types,
                })
                .await?;
            if !global.quiet {
                eprintln!("Container type created: id {}", created.id);
            }
            Ok(())
        }

        ContainerTypesCommand::Update {
            id,
            name,
            volume,
            unit,
            product_types,
        } => {
            inv.update_container_type(
                id,
                ContainerTypeInput {
                    name,
                    volume,
                    unit_id: Some(unit),
                    product_type_ids: product_types,
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Container type {id} updated");
            }
            Ok(())
        }

        ContainerTypesCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete container type {id}? Containers of this type keep a dangling type id."),
                global.yes,
            )? {
                return Ok(());
            }
            inv.delete_container_type(id).await?;
            if !global.quiet {
                eprintln!("Container type {id} deleted");
            }
            Ok(())
        }
    }
}
