//! Auth command handlers: login, register, whoami, logout.
//!
//! Login exchanges a third-party identity token for a service token and
//! persists it; logout (and any 401) discards the persisted token.

use stillage_core::Inventory;

use crate::cli::{AuthArgs, AuthCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

fn resolve_id_token(flag: Option<String>) -> Result<String, CliError> {
    if let Some(token) = flag {
        return Ok(token);
    }
    let token = dialoguer::Password::new()
        .with_prompt("Identity token")
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    if token.trim().is_empty() {
        return Err(CliError::validation("Enter an identity token."));
    }
    Ok(token)
}

pub async fn handle(
    inv: &mut Inventory,
    args: AuthArgs,
    global: &GlobalOpts,
    profile_name: &str,
) -> Result<(), CliError> {
    match args.command {
        AuthCommand::Login { id_token } => {
            let id_token = resolve_id_token(id_token)?;
            let token = inv.login(&id_token).await?;
            config::store_token(profile_name, &token)?;
            if !global.quiet {
                eprintln!("Logged in");
            }
            Ok(())
        }

        AuthCommand::Register { id_token } => {
            let id_token = resolve_id_token(id_token)?;
            let token = inv.register(&id_token).await?;
            config::store_token(profile_name, &token)?;
            if !global.quiet {
                eprintln!("Registered and logged in");
            }
            Ok(())
        }

        AuthCommand::Whoami => {
            if !inv.client().session().is_authenticated() {
                return Err(CliError::NoSession);
            }
            let me = inv.current_user().await?;
            let out = output::render_single(
                &global.output,
                &me,
                |u| format!("{} <{}>", u.full_name(), u.email),
                |u| u.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AuthCommand::Logout => {
            inv.logout();
            config::clear_token(profile_name);
            if !global.quiet {
                eprintln!("Logged out");
            }
            Ok(())
        }
    }
}
