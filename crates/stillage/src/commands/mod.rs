//! Command handler modules, one per resource subcommand tree.

pub mod auth_cmd;
pub mod config_cmd;
pub mod container_types;
pub mod containers;
pub mod history;
pub mod product_types;
pub mod products;
pub mod roles;
pub mod units;
pub mod users;
pub mod util;
