//! Hotplate CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! hp-cli migrate
//!
//! # Bootstrap a vendor account
//! hp-cli vendor create -e tacos@example.com -n "Taco Cart" --owner "Dana" \
//!     --phone "+1 555 867 5309" --password "secret-sauce" \
//!     --address "1 Plaza" --pincode 94103 --food-type mexican
//!
//! # Seed demo data for local development
//! hp-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `vendor create` - Create vendor accounts
//! - `seed` - Seed database with demo vendors and menus

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hp-cli")]
#[command(author, version, about = "Hotplate CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage vendor accounts
    Vendor {
        #[command(subcommand)]
        action: VendorAction,
    },
    /// Seed database with demo data
    Seed,
}

#[derive(Subcommand)]
enum VendorAction {
    /// Create a new vendor account
    Create {
        /// Vendor login email
        #[arg(short, long)]
        email: String,

        /// Restaurant display name
        #[arg(short, long)]
        name: String,

        /// Owner's name
        #[arg(long)]
        owner: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Login password
        #[arg(long)]
        password: String,

        /// Street address
        #[arg(long, default_value = "")]
        address: String,

        /// Delivery area postal code
        #[arg(long)]
        pincode: String,

        /// Cuisine tags (repeatable)
        #[arg(long = "food-type")]
        food_types: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Vendor { action } => match action {
            VendorAction::Create {
                email,
                name,
                owner,
                phone,
                password,
                address,
                pincode,
                food_types,
            } => {
                commands::vendor::create(commands::vendor::CreateVendorArgs {
                    email,
                    name,
                    owner,
                    phone,
                    password,
                    address,
                    pincode,
                    food_types,
                })
                .await?;
            }
        },
        Commands::Seed => commands::seed::demo_data().await?,
    }
    Ok(())
}
