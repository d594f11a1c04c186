//! User command handlers (admin surface).

use serde::Serialize;
use tabled::Tabled;

use stillage_core::{Inventory, ListEntry, Role, User, UserInput};

use crate::cli::{GlobalOpts, UsersArgs, UsersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Confirmed")]
    confirmed: String,
}

impl UserRow {
    fn build(user: &User, roles: &[Role]) -> Self {
        let role = user
            .role_id
            .and_then(|rid| roles.iter().find(|r| r.id == rid))
            .map_or_else(
                || user.role_id.map_or_else(|| "-".into(), |r| r.to_string()),
                |r| r.name.clone(),
            );
        Self {
            id: user.id,
            name: user.full_name(),
            email: user.email.clone(),
            role,
            confirmed: if user.confirmed { "yes" } else { "no" }.into(),
        }
    }
}

impl ListEntry for UserRow {
    // The users screen searches name and email.
    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.email.clone()]
    }

    fn sort_key(&self) -> String {
        self.name.clone()
    }
}

fn detail(user: &User) -> String {
    format!(
        "ID:         {}\nName:       {}\nEmail:      {}\nRole:       {}\nConfirmed:  {}",
        user.id,
        user.full_name(),
        user.email,
        user.role_id.map_or_else(|| "-".into(), |r| r.to_string()),
        if user.confirmed { "yes" } else { "no" },
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    inv: &mut Inventory,
    args: UsersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        UsersCommand::List { list, role } => {
            inv.refresh_roles().await?;

            let users = if let Some(role_id) = role {
                inv.client()
                    .list_users_by_role(role_id)
                    .await
                    .map_err(stillage_core::CoreError::from)?
                    .into_iter()
                    .map(User::from)
                    .collect()
            } else {
                inv.refresh_users().await?;
                inv.users().items().to_vec()
            };

            let rows: Vec<UserRow> = users
                .iter()
                .map(|u| UserRow::build(u, inv.roles().items()))
                .collect();
            let view = util::build_view(rows, &list);
            let page = view.visible();
            util::print_page(global, &page, |r| (*r).clone(), |r| r.id.to_string());
            Ok(())
        }

        UsersCommand::Get { id, email } => {
            let user = if let Some(email) = email {
                inv.user_by_email(&email).await?
            } else {
                let Some(id) = id else {
                    return Err(CliError::validation("Provide an id or --email."));
                };
                inv.client()
                    .get_user(id)
                    .await
                    .map_err(stillage_core::CoreError::from)?
                    .into()
            };

            let out = output::render_single(&global.output, &user, detail, |u| u.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        UsersCommand::Create {
            email,
            name,
            surname,
            fathers_name,
            role,
        } => {
            let created = inv
                .create_user(UserInput {
                    email,
                    name,
                    surname,
                    fathers_name,
                    role_id: role,
                })
                .await?;
            if !global.quiet {
                eprintln!("User created: id {}", created.id);
            }
            Ok(())
        }

        UsersCommand::Update {
            id,
            email,
            name,
            surname,
            fathers_name,
            role,
        } => {
            inv.update_user(
                id,
                UserInput {
                    email,
                    name,
                    surname,
                    fathers_name,
                    role_id: role,
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("User {id} updated");
            }
            Ok(())
        }

        UsersCommand::Confirm { id } => {
            let confirmed = inv.confirm_user(id).await?;
            if !global.quiet {
                eprintln!("User {} confirmed", confirmed.id);
            }
            Ok(())
        }

        UsersCommand::SetRole { id, role } => {
            inv.set_user_role(id, role).await?;
            if !global.quiet {
                eprintln!("User {id} role set to {role}");
            }
            Ok(())
        }

        UsersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete user {id}?"), global.yes)? {
                return Ok(());
            }
            inv.delete_user(id).await?;
            if !global.quiet {
                eprintln!("User {id} deleted");
            }
            Ok(())
        }
    }
}
