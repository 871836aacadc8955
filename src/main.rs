use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use inventory_store::{
    config::{
        database,
        settings::{self, ExportFormat},
    },
    core::{category, item, item::ItemInput, report, sample},
    errors::{Error, Result},
    export,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inventory-store")]
#[command(about = "Inventory store operations CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every item with its category name
    List,
    /// List category options
    Categories,
    /// Show a single item
    Show { id: i64 },
    /// Create an item
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[arg(long)]
        category_id: i64,
    },
    /// Replace an item's name, price and category
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: f64,
        #[arg(long)]
        category_id: i64,
    },
    /// Delete an item and its serial numbers
    Delete { id: i64 },
    /// Print item counts per category as JSON
    Report,
    /// Insert the ten sample items
    GenerateSample,
    /// Write the inventory spreadsheet
    Export {
        /// Output file, defaults to the suggested filename in the current directory
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overrides the format from config.toml
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    let cli = Cli::parse();

    // 3. Load settings
    let app_config = settings::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;

    // 4. Connect and make sure the schema and categories exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db).await?;
    category::seed_categories(&db, &app_config.categories).await?;

    // 5. Run the command
    match cli.command {
        Commands::List => print_json(&item::list_items_with_category(&db).await?)?,
        Commands::Categories => print_json(&category::get_category_options(&db).await?)?,
        Commands::Show { id } => match item::get_item_by_id(&db, id).await? {
            Some(found) => print_json(&found)?,
            None => return Err(Error::ItemNotFound { id }),
        },
        Commands::Create {
            name,
            price,
            category_id,
        } => {
            let created = item::create_item(&db, ItemInput::new(&name, price, category_id))
                .await
                .inspect_err(|e| error!("{e}"))?;
            print_json(&created)?;
        }
        Commands::Update {
            id,
            name,
            price,
            category_id,
        } => {
            let updated = item::update_item(&db, id, ItemInput::new(&name, price, category_id))
                .await
                .inspect_err(|e| error!("{e}"))?;
            print_json(&updated)?;
        }
        Commands::Delete { id } => {
            if item::delete_item(&db, id).await? {
                info!("Item {id} deleted");
            } else {
                info!("Item {id} did not exist");
            }
        }
        Commands::Report => print_json(&report::count_items_by_category_name(&db).await?)?,
        Commands::GenerateSample => {
            let inserted = sample::generate_sample_items(&db).await?;
            info!("Inserted {inserted} sample items");
        }
        Commands::Export { output, format } => {
            let encoder = export::encoder_for(format.unwrap_or(app_config.export.format));
            let file = report::export_inventory_table(&db, encoder.as_ref()).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(&file.filename));
            std::fs::write(&path, &file.bytes)?;
            info!(
                "Wrote {} ({}, {} bytes)",
                path.display(),
                file.content_type,
                file.bytes.len()
            );
        }
    }

    Ok(())
}
