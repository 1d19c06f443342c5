//! Snapshots the catalog into `data-export.json` for replay on another
//! database instance. Exits non-zero on any failure; a failed run never
//! leaves a valid-looking artifact behind.

use std::fs;

use vitrine::db::{AppEnv, establish_connection_pool, resolve_database_url};
use vitrine::repository::DieselRepository;
use vitrine::services::import_export::export_catalog;

const EXPORT_PATH: &str = "data-export.json";

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env = AppEnv::from_env();
    let database_url = resolve_database_url(env)?;
    let pool = establish_connection_pool(&database_url)?;
    let repo = DieselRepository::new(pool);

    log::info!("Exporting catalog data...");
    let export = export_catalog(&repo)?;

    let json = serde_json::to_string_pretty(&export)?;
    fs::write(EXPORT_PATH, json)?;

    log::info!("Catalog exported to {EXPORT_PATH}");
    log::info!("  categories: {}", export.categories.len());
    log::info!("  products:   {}", export.products.len());
    log::info!("  deep links: {}", export.deep_links.len());
    log::info!("Point DATABASE_URL at the destination and run the import binary next.");
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Error exporting catalog: {e}");
        std::process::exit(1);
    }
}
