//! Measurement-unit command handlers.

use serde::Serialize;
use tabled::Tabled;

use stillage_core::{Inventory, ListEntry, Unit, UnitKind};

use crate::cli::{GlobalOpts, UnitKindArg, UnitsArgs, UnitsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Debug, Clone, Serialize, Tabled)]
struct UnitRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Kind")]
    kind: String,
}

impl From<&Unit> for UnitRow {
    fn from(u: &Unit) -> Self {
        Self {
            id: u.id,
            title: u.title.clone(),
            kind: u.kind.to_string(),
        }
    }
}

impl ListEntry for UnitRow {
    fn search_text(&self) -> Vec<String> {
        vec![self.title.clone(), self.kind.clone()]
    }

    fn sort_key(&self) -> String {
        self.title.clone()
    }
}

fn to_kind(arg: UnitKindArg) -> UnitKind {
    match arg {
        UnitKindArg::Default => UnitKind::Default,
        UnitKindArg::Mass => UnitKind::Mass,
        UnitKindArg::Capacity => UnitKind::Capacity,
    }
}

pub async fn handle(
    inv: &mut Inventory,
    args: UnitsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        UnitsCommand::List(list) => {
            inv.refresh_units().await?;
            let rows: Vec<UnitRow> = inv.units().items().iter().map(UnitRow::from).collect();
            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(global, &page, |r| (*r).clone(), |r| r.id.to_string());
            Ok(())
        }

        UnitsCommand::Get { id } => {
            let unit: Unit = inv
                .client()
                .get_unit(id)
                .await
                .map_err(stillage_core::CoreError::from)?
                .into();
            let out = output::render_single(
                &global.output,
                &unit,
                |u| format!("ID:     {}\nTitle:  {}\nKind:   {}", u.id, u.title, u.kind),
                |u| u.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UnitsCommand::Create { title, kind } => {
            let created = inv.create_unit(&title, to_kind(kind)).await?;
            if !global.quiet {
                eprintln!("Unit created: id {}", created.id);
            }
            Ok(())
        }

        UnitsCommand::Update { id, title, kind } => {
            inv.update_unit(id, &title, to_kind(kind)).await?;
            if !global.quiet {
                eprintln!("Unit {id} updated");
            }
            Ok(())
        }

        UnitsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete unit {id}? Types measured in it keep a dangling unit id."),
                global.yes,
            )? {
                return Ok(());
            }
            inv.delete_unit(id).await?;
            if !global.quiet {
                eprintln!("Unit {id} deleted");
            }
            Ok(())
        }
    }
}
