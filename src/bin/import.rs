//! Replays `data-export.json` into the configured database. The artifact
//! must exist; a missing file is a hard error, not a no-op. Exits non-zero
//! when any step fails, which can leave the destination partially updated;
//! rerunning the import is safe because every record is upserted by slug.

use std::fs;
use std::path::Path;

use vitrine::db::{AppEnv, establish_connection_pool, resolve_database_url};
use vitrine::domain::export::CatalogExport;
use vitrine::repository::DieselRepository;
use vitrine::services::import_export::import_catalog;

const EXPORT_PATH: &str = "data-export.json";

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(EXPORT_PATH);
    if !path.exists() {
        return Err(format!(
            "export file not found: {EXPORT_PATH}; run the export binary first"
        )
        .into());
    }

    let raw = fs::read_to_string(path)?;
    let export: CatalogExport = serde_json::from_str(&raw)?;
    log::info!("Export date: {}", export.exported_at);

    let env = AppEnv::from_env();
    let database_url = resolve_database_url(env)?;
    let pool = establish_connection_pool(&database_url)?;
    let repo = DieselRepository::new(pool);

    let report = import_catalog(&export, &repo)?;

    log::info!("Catalog import completed:");
    log::info!("  categories:       {}", report.categories);
    log::info!("  products created: {}", report.products_created);
    log::info!("  products updated: {}", report.products_updated);
    log::info!("  products skipped: {}", report.products_skipped);
    log::info!("  deep links:       {}", report.deep_links);
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Error importing catalog: {e}");
        std::process::exit(1);
    }
}
