//! Run with: cargo run --bin check_connection

use edgar_db::{bootstrap, DEFAULT_ENV_PATH};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Connecting to MongoDB...");
    let (client, db_name) = bootstrap(DEFAULT_ENV_PATH).await?;
    println!("✓ Connected, using database `{}`", db_name);

    let db = client.database(&db_name);
    let collections = db.list_collection_names().await?;

    println!("\nCollections:");
    for name in collections {
        println!("  - {}", name);
    }

    Ok(())
}
