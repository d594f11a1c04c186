//! Clap derive structures for the `stillage` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// stillage -- CLI front end for the container-inventory service
#[derive(Debug, Parser)]
#[command(
    name = "stillage",
    version,
    about = "Track containers (barrels, vats) and the products stored in them",
    long_about = "A command-line front end for the stillage inventory service.\n\n\
        Containers, products, container types, product types, measurement\n\
        units, users, and the per-container history log are all managed\n\
        through the service's REST API; this tool holds nothing locally\n\
        except your session token.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "STILLAGE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'u', env = "STILLAGE_URL", global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STILLAGE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "STILLAGE_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (default: none)
    #[arg(long, env = "STILLAGE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage containers (barrels, vats)
    #[command(alias = "con", alias = "c")]
    Containers(ContainersArgs),

    /// Manage container types (capacity, unit, allowed product types)
    #[command(alias = "ct")]
    ContainerTypes(ContainerTypesArgs),

    /// Manage products
    #[command(alias = "prod")]
    Products(ProductsArgs),

    /// Manage product types
    #[command(alias = "pt")]
    ProductTypes(ProductTypesArgs),

    /// Manage measurement units
    Units(UnitsArgs),

    /// Manage users (admin only)
    Users(UsersArgs),

    /// View roles
    Roles(RolesArgs),

    /// View the container history log
    #[command(alias = "hist")]
    History(HistoryArgs),

    /// Log in, log out, inspect the session
    Auth(AuthArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared search / sort / pagination arguments for all list commands.
#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Case-insensitive substring filter over the resource's text fields
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort direction over the sortable column (unsorted if omitted)
    #[arg(long, value_enum)]
    pub sort: Option<SortDirection>,

    /// Page to show (clamped into range)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Rows per page (default: derived from terminal width)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Print every row, ignoring pagination
    #[arg(long, short = 'a')]
    pub all: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortDirection {
    Asc,
    Desc,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONTAINERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ContainersArgs {
    #[command(subcommand)]
    pub command: ContainersCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContainersCommand {
    /// List containers
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Server-side filter: only containers of this type id
        #[arg(long, conflicts_with_all = &["product", "status"])]
        type_id: Option<i64>,

        /// Server-side filter: only containers holding this product id
        #[arg(long)]
        product: Option<i64>,

        /// Server-side filter: only containers in this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },

    /// Get container details
    Get {
        /// Container id
        #[arg(required_unless_present_any = ["code", "name"])]
        id: Option<i64>,

        /// Look up by display code instead
        #[arg(long, conflicts_with = "name")]
        code: Option<String>,

        /// Look up by name instead
        #[arg(long)]
        name: Option<String>,
    },

    /// Create a container
    Create {
        /// Container name
        #[arg(long)]
        name: String,

        /// Container type id
        #[arg(long = "type")]
        type_id: i64,

        /// Product id to store (must be permitted by the type)
        #[arg(long)]
        product: Option<i64>,

        /// Stored quantity (validated against the type's capacity)
        #[arg(long)]
        quantity: Option<f64>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Update a container
    Update {
        /// Container id
        id: i64,

        /// Container name
        #[arg(long)]
        name: String,

        /// Container type id
        #[arg(long = "type")]
        type_id: i64,

        /// Product id to store
        #[arg(long)]
        product: Option<i64>,

        /// Stored quantity
        #[arg(long)]
        quantity: Option<f64>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a container
    Delete {
        /// Container id
        id: i64,
    },

    /// Show the history log for a container
    History {
        /// Container id
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Default,
    Active,
    Inactive,
    Maintenance,
    Disposed,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONTAINER TYPES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ContainerTypesArgs {
    #[command(subcommand)]
    pub command: ContainerTypesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContainerTypesCommand {
    /// List container types
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Server-side filter: only types measured in this unit id
        #[arg(long)]
        unit: Option<i64>,
    },

    /// Get container type details
    Get {
        /// Container type id
        #[arg(required_unless_present = "name")]
        id: Option<i64>,

        /// Look up by name instead
        #[arg(long)]
        name: Option<String>,
    },

    /// Create a container type
    Create {
        /// Type name
        #[arg(long)]
        name: String,

        /// Capacity of containers of this type
        #[arg(long)]
        volume: f64,

        /// Measurement unit id
        #[arg(long)]
        unit: i64,

        /// Permitted product type ids (comma-separated; empty = unrestricted)
        #[arg(long, value_delimiter = ',')]
        product_types: Vec<i64>,
    },

    /// Update a container type
    Update {
        /// Container type id
        id: i64,

        /// Type name
        #[arg(long)]
        name: String,

        /// Capacity of containers of this type
        #[arg(long)]
        volume: f64,

        /// Measurement unit id
        #[arg(long)]
        unit: i64,

        /// Permitted product type ids (replaces the existing set)
        #[arg(long, value_delimiter = ',')]
        product_types: Vec<i64>,
    },

    /// Delete a container type
    Delete {
        /// Container type id
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRODUCTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Server-side filter: only products of this product type id
        #[arg(long, conflicts_with = "expired")]
        type_id: Option<i64>,

        /// Server-side filter: only products past their expiration date
        #[arg(long)]
        expired: bool,
    },

    /// Get product details
    Get {
        /// Product id
        id: i64,
    },

    /// Create a product
    Create {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product type id
        #[arg(long = "type")]
        type_id: i64,

        /// Production date (YYYY-MM-DD)
        #[arg(long)]
        produced: Option<String>,

        /// Expiration date (YYYY-MM-DD)
        #[arg(long)]
        expires: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Update a product
    Update {
        /// Product id
        id: i64,

        /// Product name
        #[arg(long)]
        name: String,

        /// Product type id
        #[arg(long = "type")]
        type_id: i64,

        /// Production date (YYYY-MM-DD)
        #[arg(long)]
        produced: Option<String>,

        /// Expiration date (YYYY-MM-DD)
        #[arg(long)]
        expires: Option<String>,

        /// Description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: i64,
    },

    /// List containers currently holding a product
    Containers {
        /// Product id
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRODUCT TYPES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProductTypesArgs {
    #[command(subcommand)]
    pub command: ProductTypesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductTypesCommand {
    /// List product types
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get product type details
    Get {
        /// Product type id
        #[arg(required_unless_present = "title")]
        id: Option<i64>,

        /// Look up by title instead
        #[arg(long)]
        title: Option<String>,
    },

    /// Create a product type
    Create {
        /// Type title
        #[arg(long)]
        title: String,
    },

    /// Update a product type
    Update {
        /// Product type id
        id: i64,

        /// Type title
        #[arg(long)]
        title: String,
    },

    /// Delete a product type
    Delete {
        /// Product type id
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  UNITS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UnitsArgs {
    #[command(subcommand)]
    pub command: UnitsCommand,
}

#[derive(Debug, Subcommand)]
pub enum UnitsCommand {
    /// List measurement units
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get unit details
    Get {
        /// Unit id
        id: i64,
    },

    /// Create a unit
    Create {
        /// Unit title (e.g. "liters")
        #[arg(long)]
        title: String,

        /// Unit classification
        #[arg(long, default_value = "default", value_enum)]
        kind: UnitKindArg,
    },

    /// Update a unit
    Update {
        /// Unit id
        id: i64,

        /// Unit title
        #[arg(long)]
        title: String,

        /// Unit classification
        #[arg(long, default_value = "default", value_enum)]
        kind: UnitKindArg,
    },

    /// Delete a unit
    Delete {
        /// Unit id
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitKindArg {
    Default,
    Mass,
    Capacity,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Server-side filter: only users with this role id
        #[arg(long)]
        role: Option<i64>,
    },

    /// Get user details
    Get {
        /// User id
        #[arg(required_unless_present = "email")]
        id: Option<i64>,

        /// Look up by email instead
        #[arg(long)]
        email: Option<String>,
    },

    /// Create a user
    Create {
        /// Email address
        #[arg(long)]
        email: String,

        /// Given name
        #[arg(long)]
        name: String,

        /// Surname
        #[arg(long)]
        surname: String,

        /// Patronymic (optional)
        #[arg(long)]
        fathers_name: Option<String>,

        /// Role id
        #[arg(long)]
        role: i64,
    },

    /// Update a user
    Update {
        /// User id
        id: i64,

        /// Email address
        #[arg(long)]
        email: String,

        /// Given name
        #[arg(long)]
        name: String,

        /// Surname
        #[arg(long)]
        surname: String,

        /// Patronymic (optional)
        #[arg(long)]
        fathers_name: Option<String>,

        /// Role id
        #[arg(long)]
        role: i64,
    },

    /// Confirm a self-registered account
    Confirm {
        /// User id
        id: i64,
    },

    /// Change a user's role
    SetRole {
        /// User id
        id: i64,

        /// New role id
        #[arg(long)]
        role: i64,
    },

    /// Delete a user
    Delete {
        /// User id
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ROLES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RolesArgs {
    #[command(subcommand)]
    pub command: RolesCommand,
}

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List roles
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get role details
    Get {
        /// Role id
        id: i64,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HISTORY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List history records
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get a single history record
    Get {
        /// Record id
        id: i64,
    },

    /// The n most recent records
    Recent {
        /// Number of records
        #[arg(default_value = "20")]
        count: u32,
    },

    /// Records for one container
    Container {
        /// Container id
        id: i64,
    },

    /// Records for one product
    Product {
        /// Product id
        id: i64,
    },

    /// Records created by one user
    User {
        /// User id
        id: i64,
    },

    /// Records of one action type
    Action {
        /// Action type (e.g. Fill, Empty)
        action_type: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Exchange a third-party identity token for a session
    Login {
        /// Identity token (prompted for when omitted)
        #[arg(long, env = "STILLAGE_ID_TOKEN", hide_env = true)]
        id_token: Option<String>,
    },

    /// Register the first (admin) account
    Register {
        /// Identity token (prompted for when omitted)
        #[arg(long, env = "STILLAGE_ID_TOKEN", hide_env = true)]
        id_token: Option<String>,
    },

    /// Show the authenticated user
    Whoami,

    /// Discard the stored session token
    Logout,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
