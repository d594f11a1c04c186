//! Role command handlers (read-only).

use serde::Serialize;
use tabled::Tabled;

use stillage_core::{Inventory, ListEntry, Role};

use crate::cli::{GlobalOpts, RolesArgs, RolesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Debug, Clone, Serialize, Tabled)]
struct RoleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Role> for RoleRow {
    fn from(r: &Role) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
        }
    }
}

impl ListEntry for RoleRow {
    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn sort_key(&self) -> String {
        self.name.clone()
    }
}

pub async fn handle(
    inv: &mut Inventory,
    args: RolesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RolesCommand::List(list) => {
            inv.refresh_roles().await?;
            let rows: Vec<RoleRow> = inv.roles().items().iter().map(RoleRow::from).collect();
            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(global, &page, |r| (*r).clone(), |r| r.id.to_string());
            Ok(())
        }

        RolesCommand::Get { id } => {
            let role: Role = inv
                .client()
                .get_role(id)
                .await
                .map_err(stillage_core::CoreError::from)?
                .into();
            let out = output::render_single(
                &global.output,
                &role,
                |r| format!("ID:    {}\nName:  {}", r.id, r.name),
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
