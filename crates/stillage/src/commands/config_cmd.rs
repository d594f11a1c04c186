//! Config command handlers: init, show, profiles, use.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = toml::to_string_pretty(&cfg).map_err(stillage_config::ConfigError::from)?;
            output::print_output(&out, global.quiet);
            if !global.quiet {
                eprintln!("Config file: {}", config::config_path().display());
            }
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.clone().unwrap_or_default();
            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort();
            for name in names {
                let marker = if *name == default { " (default)" } else { "" };
                println!("{name}{marker}");
            }
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound { name });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Default profile set to '{name}'");
            }
            Ok(())
        }
    }
}

/// Guided first-run setup: one profile with the backend URL.
fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg: Config = config::load_config_or_default();

    let name: String = dialoguer::Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    let url: String = dialoguer::Input::new()
        .with_prompt("Backend URL")
        .default("http://localhost:5189".into())
        .interact_text()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    url::Url::parse(&url).map_err(|e| CliError::InvalidConfig {
        field: "url".into(),
        reason: e.to_string(),
    })?;

    let insecure = dialoguer::Confirm::new()
        .with_prompt("Accept self-signed TLS certificates?")
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    cfg.profiles.insert(
        name.clone(),
        Profile {
            url,
            ca_cert: None,
            insecure: insecure.then_some(true),
            timeout: None,
        },
    );
    if cfg.default_profile.is_none() {
        cfg.default_profile = Some(name.clone());
    }
    config::save_config(&cfg)?;

    if !global.quiet {
        eprintln!(
            "Profile '{name}' written to {}",
            config::config_path().display()
        );
        eprintln!("Next: stillage auth login");
    }
    Ok(())
}
