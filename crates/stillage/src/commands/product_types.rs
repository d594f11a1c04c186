//! Product-type command handlers.

use serde::Serialize;
use tabled::Tabled;

use stillage_core::{Inventory, ListEntry, ProductType};

use crate::cli::{GlobalOpts, ProductTypesArgs, ProductTypesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Debug, Clone, Serialize, Tabled)]
struct ProductTypeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&ProductType> for ProductTypeRow {
    fn from(pt: &ProductType) -> Self {
        Self {
            id: pt.id,
            title: pt.title.clone(),
        }
    }
}

impl ListEntry for ProductTypeRow {
    fn search_text(&self) -> Vec<String> {
        vec![self.title.clone()]
    }

    fn sort_key(&self) -> String {
        self.title.clone()
    }
}

pub async fn handle(
    inv: &mut Inventory,
    args: ProductTypesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductTypesCommand::List(list) => {
            inv.refresh_product_types().await?;
            let rows: Vec<ProductTypeRow> = inv
                .product_types()
                .items()
                .iter()
                .map(ProductTypeRow::from)
                .collect();
            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(global, &page, |r| (*r).clone(), |r| r.id.to_string());
            Ok(())
        }

        ProductTypesCommand::Get { id, title } => {
            let pt: ProductType = if let Some(title) = title {
                inv.client()
                    .get_product_type_by_title(&title)
                    .await
                    .map_err(stillage_core::CoreError::from)?
                    .into()
            } else {
                let Some(id) = id else {
                    return Err(CliError::validation("Provide an id or --title."));
                };
                inv.client()
                    .get_product_type(id)
                    .await
                    .map_err(stillage_core::CoreError::from)?
                    .into()
            };

            let out = output::render_single(
                &global.output,
                &pt,
                |pt| format!("ID:     {}\nTitle:  {}", pt.id, pt.title),
                |pt| pt.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductTypesCommand::Create { title } => {
            let created = inv.create_product_type(&title).await?;
            if !global.quiet {
                eprintln!("Product type created: id {}", created.id);
            }
            Ok(())
        }

        ProductTypesCommand::Update { id, title } => {
            inv.update_product_type(id, &title).await?;
            if !global.quiet {
                eprintln!("Product type {id} updated");
            }
            Ok(())
        }

        ProductTypesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete product type {id}?"), global.yes)? {
                return Ok(());
            }
            inv.delete_product_type(id).await?;
            if !global.quiet {
                eprintln!("Product type {id} deleted");
            }
            Ok(())
        }
    }
}
