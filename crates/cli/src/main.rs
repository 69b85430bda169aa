//! AutoPOS CLI - dealership point of sale from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Load the demo catalog and customers
//! autopos seed
//!
//! # Browse the catalog
//! autopos catalog list --make Toyota --sort price-low
//!
//! # Build a cart and check out
//! autopos cart add C-0001 --color red --quantity 2
//! autopos checkout --customer CU-1 --payment cash
//!
//! # Review and export
//! autopos report
//! autopos export orders --output orders.csv
//! ```
//!
//! # Commands
//!
//! - `seed` - Reset to the bundled demo data
//! - `catalog list` - Filter and sort vehicles
//! - `cart` - Show and edit the cart
//! - `checkout` - Commit the cart and print the invoice
//! - `orders` - List, search and show orders
//! - `customers` - List, search and add customers
//! - `report` - Sales and inventory summary
//! - `export` - CSV exports

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autopos_admin::services::{CatalogFilter, SortOrder};
use autopos_admin::{AdminConfig, AppError, PosSession};
use autopos_core::{PaymentMethod, Price};

mod commands;

#[derive(Parser)]
#[command(name = "autopos")]
#[command(author, version, about = "AutoPOS dealership point of sale")]
struct Cli {
    /// `SQLite` database file (overrides `AUTOPOS_DATABASE_PATH`)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace all data with the demo catalog and customers
    Seed,
    /// Browse the vehicle catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Show or edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Commit the cart as an order and print the invoice
    Checkout {
        /// Customer id (e.g. CU-1)
        #[arg(short, long)]
        customer: String,

        /// Payment method (card, cash, bank)
        #[arg(short, long, default_value = "card")]
        payment: PaymentMethod,
    },
    /// Review committed orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomersAction,
    },
    /// Print sales and inventory figures
    Report,
    /// Write a CSV export to stdout or a file
    Export {
        /// What to export
        #[arg(value_enum)]
        target: ExportTarget,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List vehicles matching the given filters
    List(ListArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Text to find in make, model or VIN
    #[arg(short, long, default_value = "")]
    search: String,

    /// Color to include (repeatable)
    #[arg(short, long = "color")]
    colors: Vec<String>,

    /// Exact make
    #[arg(short, long)]
    make: Option<String>,

    #[arg(long)]
    min_price: Option<u32>,

    #[arg(long)]
    max_price: Option<u32>,

    #[arg(long)]
    min_year: Option<u16>,

    #[arg(long)]
    max_year: Option<u16>,

    /// Sort order (latest, price-low, price-high)
    #[arg(long, default_value = "latest")]
    sort: SortOrder,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add units of a vehicle
    Add {
        /// Product id (e.g. C-0001)
        product: String,

        /// Color variant (defaults to the first listed color)
        #[arg(short, long)]
        color: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line
    Remove { product: String, color: String },
    /// Set a line's quantity; zero or less removes it
    Set {
        product: String,
        color: String,
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Remove every line
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, most recent first
    List {
        /// Text to find in invoice number or customer name
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print the invoice for one order
    Show {
        /// Invoice number (e.g. INV-1704110400000)
        id: String,
    },
}

#[derive(Subcommand)]
enum CustomersAction {
    /// List customers
    List {
        /// Text to find in name, email or phone
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Register a new customer
    Add {
        name: String,
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        address: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportTarget {
    Orders,
    Inventory,
    Customers,
}

fn main() {
    let cli = Cli::parse();
    let config = AdminConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.log_json));

    let result = config
        .map_err(AppError::from)
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        if e.is_validation() {
            tracing::error!("{}", e.user_message());
        } else {
            tracing::error!(error = %e, "Command failed: {}", e.user_message());
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "autopos_admin=info,autopos_cli=info".into());

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli, config: AdminConfig) -> Result<(), AppError> {
    let config = match cli.database {
        Some(path) => config.with_database_path(path),
        None => config,
    };
    let mut session = PosSession::from_config(&config)?;

    match cli.command {
        Commands::Seed => commands::seed::run(&mut session)?,
        Commands::Catalog { action } => match action {
            CatalogAction::List(args) => commands::catalog::list(&session, &args.into_filter()),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&session),
            CartAction::Add {
                product,
                color,
                quantity,
            } => commands::cart::add(&mut session, &product, color.as_deref(), quantity)?,
            CartAction::Remove { product, color } => {
                commands::cart::remove(&mut session, &product, &color)?;
            }
            CartAction::Set {
                product,
                color,
                quantity,
            } => commands::cart::set(&mut session, &product, &color, quantity)?,
            CartAction::Clear => commands::cart::clear(&mut session)?,
        },
        Commands::Checkout { customer, payment } => {
            commands::checkout::run(&mut session, &customer, payment)?;
        }
        Commands::Orders { action } => match action {
            OrdersAction::List { search } => commands::orders::list(&session, search.as_deref()),
            OrdersAction::Show { id } => commands::orders::show(&session, &id)?,
        },
        Commands::Customers { action } => match action {
            CustomersAction::List { search } => {
                commands::customers::list(&session, search.as_deref());
            }
            CustomersAction::Add {
                name,
                email,
                phone,
                address,
            } => commands::customers::add(&mut session, name, email, phone, address)?,
        },
        Commands::Report => commands::report::run(&session, config.low_stock_threshold),
        Commands::Export { target, output } => {
            let csv = match target {
                ExportTarget::Orders => commands::export::orders(&session),
                ExportTarget::Inventory => commands::export::inventory(&session),
                ExportTarget::Customers => commands::export::customers(&session),
            };
            commands::export::write(&csv, output.as_deref())?;
        }
    }
    Ok(())
}

impl ListArgs {
    fn into_filter(self) -> CatalogFilter {
        CatalogFilter {
            search: self.search,
            colors: self.colors,
            min_price: self.min_price.map(|p| Price::from_units(i64::from(p))),
            max_price: self.max_price.map(|p| Price::from_units(i64::from(p))),
            min_year: self.min_year,
            max_year: self.max_year,
            make: self.make,
            sort: self.sort,
        }
    }
}
