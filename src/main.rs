use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use storefront::catalog::{CatalogClient, Item, ItemField};
use storefront::config::Config;
use storefront::logging::init_tracing;
use storefront::ui::products::{ProductIntent, ProductListView, SortOrder};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse and edit products of a remote catalog")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List products, optionally filtered by category and sorted by price
    List {
        /// Number of products to load when no filter or sort is given
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..),
            conflicts_with_all = ["sort", "category"]
        )]
        limit: Option<u32>,

        /// Load the whole catalog
        #[arg(long, conflicts_with = "limit")]
        all: bool,

        /// Only show products of this category (exact match)
        #[arg(long)]
        category: Option<String>,

        /// Sort by price: price-asc or price-desc
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Create a product
    Add(AddArgs),

    /// Change fields of an existing product
    Update {
        id: u64,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Delete a product
    Delete { id: u64 },

    /// Show the categories offered for filtering
    Categories,
}

#[derive(Debug, Args)]
struct AddArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    price: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    category: String,
    #[arg(long)]
    image: String,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    image: Option<String>,
}

impl AddArgs {
    fn into_fields(self) -> Vec<(ItemField, String)> {
        vec![
            (ItemField::Title, self.title),
            (ItemField::Price, self.price),
            (ItemField::Description, self.description),
            (ItemField::Category, self.category),
            (ItemField::Image, self.image),
        ]
    }
}

impl UpdateArgs {
    fn into_fields(self) -> Vec<(ItemField, String)> {
        [
            (ItemField::Title, self.title),
            (ItemField::Price, self.price),
            (ItemField::Description, self.description),
            (ItemField::Category, self.category),
            (ItemField::Image, self.image),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.catalog.base_url = base_url;
        config.validate()?;
    }

    let client = CatalogClient::new(&config.catalog).context("Failed to create catalog client")?;
    let mut view = ProductListView::new(Arc::new(client), &config.catalog);

    match cli.command {
        Command::List {
            limit,
            all,
            category,
            sort,
        } => {
            if let Some(order) = sort {
                view.dispatch(ProductIntent::SortOrderSelected { order });
            }
            if let Some(category) = category {
                view.set_category(category).await?;
            } else if all || view.state().sort_order.is_active() {
                view.load_all().await?;
            } else {
                let limit = limit.unwrap_or(view.default_limit());
                view.load_limited(limit).await?;
            }
            print_items(view.items());
        }
        Command::Add(args) => {
            view.toggle_form();
            for (field, value) in args.into_fields() {
                view.set_field(field, value);
            }
            let created = view.submit().await?;
            println!("Added {}", format_item(&created));
        }
        Command::Update { id, fields } => {
            view.load_all().await?;
            let Some(target) = view.items().iter().find(|i| i.id == Some(id)).cloned() else {
                bail!("Product {} not found", id);
            };
            view.begin_edit(target);
            for (field, value) in fields.into_fields() {
                view.set_field(field, value);
            }
            let updated = view.submit().await?;
            println!("Updated {}", format_item(&updated));
        }
        Command::Delete { id } => {
            view.remove(Some(id)).await?;
            println!("Deleted product {}", id);
        }
        Command::Categories => {
            for category in view.categories() {
                println!("{}", category);
            }
        }
    }

    Ok(())
}

fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No products");
        return;
    }
    for item in items {
        println!("{}", format_item(item));
    }
}

fn format_item(item: &Item) -> String {
    let id = item
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "#{:<4} {:>9.2}  {:<18} {}",
        id, item.price, item.category, item.title
    )
}
