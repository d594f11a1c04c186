//! Container command handlers.
//!
//! The list view joins reference data the way the containers screen
//! does: type name, product name, and "quantity unit" volume column
//! resolved from the local reference stores.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::Tabled;

use stillage_core::{
    Container, ContainerInput, ContainerStatus, ContainerType, HistoryRecord, Inventory,
    ListEntry, Product, Unit,
};

use crate::cli::{ContainersArgs, ContainersCommand, GlobalOpts, StatusArg};
use crate::error::CliError;
use crate::output;

use super::{history, util};

// ── Table row ───────────────────────────────────────────────────────

/// Display row with reference data resolved. Serialized for the
/// structured output formats too, so scripts see the joined values.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ContainerRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub container_type: String,
    #[tabled(rename = "Volume")]
    pub volume: String,
    #[tabled(rename = "Product")]
    pub product: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl ContainerRow {
    pub fn build(
        container: &Container,
        types: &[ContainerType],
        products: &[Product],
        units: &[Unit],
    ) -> Self {
        let type_name = types
            .iter()
            .find(|t| t.id == container.type_id)
            .map_or_else(|| "Unknown".to_owned(), |t| t.name.clone());

        let product = container
            .product_id
            .and_then(|pid| products.iter().find(|p| p.id == pid))
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .map_or_else(|| "-".to_owned(), ToOwned::to_owned);

        let volume = match (container.quantity, container.unit_id) {
            (Some(qty), Some(uid)) => units
                .iter()
                .find(|u| u.id == uid)
                .map_or_else(|| qty.to_string(), |u| format!("{qty} {}", u.title)),
            (Some(qty), None) => qty.to_string(),
            _ => "-".to_owned(),
        };

        Self {
            id: container.id,
            code: container.code.clone().unwrap_or_else(|| "-".into()),
            name: container.name.clone(),
            container_type: type_name,
            volume,
            product,
            status: container.status.to_string(),
        }
    }
}

impl ListEntry for ContainerRow {
    fn search_text(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.container_type.clone(),
            self.product.clone(),
        ]
    }

    // The sortable column is the type name.
    fn sort_key(&self) -> String {
        self.container_type.clone()
    }
}

fn status_cell(status: &str, color: bool) -> String {
    if !color {
        return status.to_owned();
    }
    match status {
        "Active" => status.green().to_string(),
        "Maintenance" => status.yellow().to_string(),
        "Disposed" => status.red().to_string(),
        _ => status.dimmed().to_string(),
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(container: &Container, violations: &[String]) -> String {
    let mut lines = vec![
        format!("ID:        {}", container.id),
        format!("Code:      {}", container.code.as_deref().unwrap_or("-")),
        format!("Name:      {}", container.name),
        format!("Type:      {}", container.type_id),
        format!(
            "Product:   {}",
            container
                .product_id
                .map_or_else(|| "-".into(), |p| p.to_string())
        ),
        format!(
            "Quantity:  {}",
            container
                .quantity
                .map_or_else(|| "-".into(), |q| q.to_string())
        ),
        format!("Status:    {}", container.status),
        format!("Notes:     {}", container.notes.as_deref().unwrap_or("-")),
    ];
    for violation in violations {
        lines.push(format!("Warning:   {violation}"));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inv: &mut Inventory,
    args: ContainersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ContainersCommand::List {
            list,
            type_id,
            product,
            status,
        } => {
            // Reference data first so rows can resolve names.
            inv.refresh_reference_data().await?;

            let containers = if let Some(tid) = type_id {
                inv.containers_by_type(tid).await?
            } else if let Some(pid) = product {
                inv.containers_by_product(pid).await?
            } else if let Some(status) = status {
                inv.containers_by_status(to_status(status)).await?
            } else {
                inv.refresh_containers().await?;
                inv.containers().items().to_vec()
            };

            let color = output::should_color(&global.color);
            let rows: Vec<ContainerRow> = containers
                .iter()
                .map(|c| {
                    ContainerRow::build(
                        c,
                        inv.container_types().items(),
                        inv.products().items(),
                        inv.units().items(),
                    )
                })
                .collect();

            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(
                global,
                &page,
                |row| {
                    let mut row = (*row).clone();
                    row.status = status_cell(&row.status, color);
                    row
                },
                |row| row.id.to_string(),
            );
            Ok(())
        }

        ContainersCommand::Get { id, code, name } => {
            let container = if let Some(code) = code {
                inv.container_by_code(&code).await?
            } else if let Some(name) = name {
                inv.container_by_name(&name).await?
            } else {
                let Some(id) = id else {
                    return Err(CliError::validation("Provide an id, --code, or --name."));
                };
                inv.container_by_id(id).await?
            };

            // Load reference data for the drift check; non-fatal if the
            // type isn't known locally.
            let _ = inv.refresh_reference_data().await;
            let violations = inv.container_violations(&container);

            let out = output::render_single(
                &global.output,
                &container,
                |c| detail(c, &violations),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ContainersCommand::Create {
            name,
            type_id,
            product,
            quantity,
            notes,
        } => {
            // Constraints come from the reference stores; load them so
            // validation can see the capacity and allowed product types.
            inv.refresh_reference_data().await?;

            let created = inv
                .create_container(ContainerInput {
                    name,
                    type_id,
                    product_id: product,
                    quantity,
                    unit_id: None,
                    notes,
                })
                .await?;

            if !global.quiet {
                eprintln!(
                    "Container created: id {} code {}",
                    created.id,
                    created.code.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }

        ContainersCommand::Update {
            id,
            name,
            type_id,
            product,
            quantity,
            notes,
        } => {
            inv.refresh_reference_data().await?;

            inv.update_container(
                id,
                ContainerInput {
                    name,
                    type_id,
                    product_id: product,
                    quantity,
                    unit_id: None,
                    notes,
                },
            )
            .await?;

            if !global.quiet {
                eprintln!("Container {id} updated");
            }
            Ok(())
        }

        ContainersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete container {id}?"), global.yes)? {
                return Ok(());
            }
            inv.delete_container(id).await?;
            if !global.quiet {
                eprintln!("Container {id} deleted");
            }
            Ok(())
        }

        ContainersCommand::History { id } => {
            let records: Vec<HistoryRecord> = inv.history_for_container(id).await?;
            history::print_records(global, &records);
            Ok(())
        }
    }
}

pub fn to_status(arg: StatusArg) -> ContainerStatus {
    match arg {
        StatusArg::Default => ContainerStatus::Default,
        StatusArg::Active => ContainerStatus::Active,
        StatusArg::Inactive => ContainerStatus::Inactive,
        StatusArg::Maintenance => ContainerStatus::Maintenance,
        StatusArg::Disposed => ContainerStatus::Disposed,
    }
}
