//! Product command handlers.

use chrono::NaiveDate;
use serde::Serialize;
use tabled::Tabled;

use stillage_core::{Inventory, ListEntry, Product, ProductInput, ProductType};

use crate::cli::{GlobalOpts, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

use super::{containers, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    product_type: String,
    #[tabled(rename = "Produced")]
    produced: String,
    #[tabled(rename = "Expires")]
    expires: String,
}

fn fmt_date(d: Option<NaiveDate>) -> String {
    d.map_or_else(|| "-".into(), |d| d.to_string())
}

impl ProductRow {
    fn build(product: &Product, types: &[ProductType]) -> Self {
        let type_title = product
            .type_id
            .and_then(|tid| types.iter().find(|t| t.id == tid))
            .map_or_else(|| "Unknown".to_owned(), |t| t.title.clone());

        Self {
            id: product.id,
            name: product.name.clone(),
            product_type: type_title,
            produced: fmt_date(product.produced),
            expires: fmt_date(product.expiration_date),
        }
    }
}

impl ListEntry for ProductRow {
    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.product_type.clone()]
    }

    fn sort_key(&self) -> String {
        self.name.clone()
    }
}

fn detail(product: &Product) -> String {
    format!(
        "ID:           {}\nName:         {}\nType:         {}\nProduced:     {}\nExpires:      {}\nDescription:  {}",
        product.id,
        product.name,
        product
            .type_id
            .map_or_else(|| "-".into(), |t| t.to_string()),
        fmt_date(product.produced),
        fmt_date(product.expiration_date),
        product.description.as_deref().unwrap_or("-"),
    )
}

fn to_input(
    name: String,
    type_id: i64,
    produced: Option<String>,
    expires: Option<String>,
    description: Option<String>,
) -> Result<ProductInput, CliError> {
    let produced = produced
        .map(|raw| util::parse_date("produced", &raw))
        .transpose()?;
    let expiration_date = expires
        .map(|raw| util::parse_date("expires", &raw))
        .transpose()?;
    Ok(ProductInput {
        name,
        type_id,
        description,
        produced,
        expiration_date,
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inv: &mut Inventory,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List {
            list,
            type_id,
            expired,
        } => {
            inv.refresh_product_types().await?;

            let products = if expired {
                inv.expired_products().await?
            } else if let Some(tid) = type_id {
                inv.client()
                    .list_products_by_type(tid)
                    .await
                    .map_err(stillage_core::CoreError::from)?
                    .into_iter()
                    .map(Product::from)
                    .collect()
            } else {
                inv.refresh_products().await?;
                inv.products().items().to_vec()
            };

            let rows: Vec<ProductRow> = products
                .iter()
                .map(|p| ProductRow::build(p, inv.product_types().items()))
                .collect();
            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(global, &page, |r| (*r).clone(), |r| r.id.to_string());
            Ok(())
        }

        ProductsCommand::Get { id } => {
            let product: Product = inv
                .client()
                .get_product(id)
                .await
                .map_err(stillage_core::CoreError::from)?
                .into();
            let out =
                output::render_single(&global.output, &product, detail, |p| p.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Create {
            name,
            type_id,
            produced,
            expires,
            description,
        } => {
            let input = to_input(name, type_id, produced, expires, description)?;
            let created = inv.create_product(input).await?;
            if !global.quiet {
                eprintln!("Product created: id {}", created.id);
            }
            Ok(())
        }

        ProductsCommand::Update {
            id,
            name,
            type_id,
            produced,
            expires,
            description,
        } => {
            let input = to_input(name, type_id, produced, expires, description)?;
            inv.update_product(id, input).await?;
            if !global.quiet {
                eprintln!("Product {id} updated");
            }
            Ok(())
        }

        ProductsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete product {id}?"), global.yes)? {
                return Ok(());
            }
            inv.delete_product(id).await?;
            if !global.quiet {
                eprintln!("Product {id} deleted");
            }
            Ok(())
        }

        ProductsCommand::Containers { id } => {
            inv.refresh_reference_data().await?;
            let list = inv.containers_by_product(id).await?;
            let rows: Vec<containers::ContainerRow> = list
                .iter()
                .map(|c| {
                    containers::ContainerRow::build(
                        c,
                        inv.container_types().items(),
                        inv.products().items(),
                        inv.units().items(),
                    )
                })
                .collect();
            let out = output::render_list(
                &global.output,
                &rows,
                |r| (*r).clone(),
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
