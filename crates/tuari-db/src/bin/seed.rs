//! # Seed Data Generator
//!
//! Populates the database with sample catalog items for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 items (default)
//! cargo run -p tuari-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p tuari-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p tuari-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! ## Generated Items
//! Each catalog entry below is expanded into variants:
//! - Unique SKU: `{PREFIX}-{INDEX:04}`
//! - Quantity: 0 - 59, so a share of items lands in the low-stock report
//! - Price: the entry's base price plus a variant markup
//! - Location: one of a handful of warehouse shelves

use std::env;
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use tuari_core::{NewItem, DEFAULT_LOW_STOCK_THRESHOLD};
use tuari_db::{Database, DbConfig, DbError};

/// Base catalog: (category, name, SKU prefix, base price, description)
const CATALOG: &[(&str, &str, &str, f64, &str)] = &[
    ("Electronics", "MacBook Pro 16-inch", "MBP16", 2499.99, "M2 Pro chip, 16GB RAM, 512GB SSD"),
    ("Electronics", "Dell XPS 13", "DXP13", 1299.99, "Intel i7, 16GB RAM, 512GB SSD"),
    ("Electronics", "iPhone 15 Pro", "IP15P", 999.99, "128GB, Titanium"),
    ("Electronics", "Samsung Galaxy S24", "SGS24", 1199.99, "256GB, Titanium Gray"),
    ("Electronics", "4K Monitor", "MON4K", 449.99, "27-inch IPS, USB-C"),
    ("Electronics", "Webcam", "WCAM", 89.99, "1080p with dual microphones"),
    ("Electronics", "Tablet", "TAB", 599.99, "11-inch display, 128GB"),
    ("Electronics", "Bluetooth Speaker", "BTSPK", 129.99, "Waterproof, 12h battery"),
    ("Accessories", "Wireless Mouse", "WM", 99.99, "Ergonomic, multi-device"),
    ("Accessories", "Mechanical Keyboard", "MKB", 149.99, "Hot-swappable brown switches"),
    ("Accessories", "USB-C Cable", "USBC", 19.99, "2m braided, 100W"),
    ("Accessories", "Laptop Stand", "LSTD", 49.99, "Aluminium, adjustable height"),
    ("Accessories", "Gaming Headset", "GHS", 79.99, "7.1 surround"),
    ("Accessories", "Power Bank", "PWB", 39.99, "20000mAh, fast charge"),
    ("Storage", "External SSD", "ESSD", 129.99, "1TB, USB 3.2 Gen 2"),
    ("Storage", "microSD Card", "MSD", 24.99, "256GB, A2"),
    ("Office", "Desk Lamp", "DLMP", 34.99, "LED, dimmable"),
    ("Office", "Notebook Pack", "NBK", 12.99, "A5, dotted, 3 pack"),
];

/// Variant names and their price markups.
const VARIANTS: &[(&str, f64)] = &[
    ("", 0.0),
    ("(Refurbished)", -0.2),
    ("(Bundle)", 0.15),
    ("(Open Box)", -0.1),
];

const LOCATIONS: &[&str] = &[
    "Warehouse A - Shelf 1",
    "Warehouse A - Shelf 2",
    "Warehouse B - Shelf 1",
    "Warehouse B - Shelf 2",
    "Warehouse C - Bin 4",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut config = DbConfig::from_env()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tuari Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: $TUARI_DB_PATH)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Tuari Inventory Seed Data Generator");
    println!("===================================");
    println!("Database: {}", config.database_path.display());
    println!("Items:    {}", count);
    println!();

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::new(config).await?;
    let items = db.items();

    println!("✓ Connected to database");
    println!("✓ Schema ensured");

    let existing = items.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    println!();
    println!("Generating items...");

    let start = Instant::now();
    let mut generated = 0;

    for index in 0..count {
        let item = generate_item(index);

        match items.add(&item).await {
            Ok(_) => generated += 1,
            Err(DbError::Conflict { value, .. }) => {
                eprintln!("  Skipping duplicate SKU {}", value);
            }
            Err(e) => {
                eprintln!("Failed to insert {}: {}", item.sku, e);
            }
        }

        if generated > 0 && generated % 100 == 0 {
            println!("  Generated {} items...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} items in {:?}", generated, elapsed);

    println!();
    println!("Categories:");
    let mut total_value = 0.0;
    for summary in items.category_summary().await? {
        total_value += summary.total_value;
        println!(
            "  {}: {} items (${:.2})",
            summary.category, summary.item_count, summary.total_value
        );
    }
    println!("  Total value: ${:.2}", total_value);

    let low_stock = items.low_stock(DEFAULT_LOW_STOCK_THRESHOLD).await?;
    println!();
    println!(
        "Low stock (<= {}): {} items",
        DEFAULT_LOW_STOCK_THRESHOLD,
        low_stock.len()
    );

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds the `index`-th sample item.
fn generate_item(index: usize) -> NewItem {
    let (category, name, prefix, base_price, description) = CATALOG[index % CATALOG.len()];
    let (variant, markup) = VARIANTS[(index / CATALOG.len()) % VARIANTS.len()];

    let name = if variant.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", name, variant)
    };

    let price = (base_price * (1.0 + markup) * 100.0).round() / 100.0;
    let quantity = ((index * 37) % 60) as i64;

    NewItem::new(name, category, format!("{}-{:04}", prefix, index))
        .description(description)
        .quantity(quantity)
        .price(price)
        .location(LOCATIONS[index % LOCATIONS.len()])
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tuari_db=trace` - Show trace for the storage crate only
/// - Default: INFO level, storage at debug, sqlx at warn
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tuari_db=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}
