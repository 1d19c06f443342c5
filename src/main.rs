use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use vitrine::db::{AppEnv, establish_connection_pool, resolve_database_url};
use vitrine::models::config::ServerConfig;
use vitrine::routes::api::api_products;
use vitrine::routes::main::index;
use vitrine::routes::metadata::{robots, sitemap};
use vitrine::routes::products::{product_page, products_page};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let env = AppEnv::from_env();

    let database_url = match resolve_database_url(env) {
        Ok(url) => url,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database pool: {e}");
            std::process::exit(1);
        }
    };

    let tera = match Tera::new("templates/**/*") {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to load templates: {e}");
            std::process::exit(1);
        }
    };

    let config = ServerConfig::from_env(env);
    let bind_address = config.bind_address.clone();
    log::info!("Starting storefront at {bind_address}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(index)
            .service(api_products)
            .service(sitemap)
            .service(robots)
            .service(products_page)
            .service(product_page)
            .service(Files::new("/static", "./static"))
    })
    .bind(bind_address)?
    .run()
    .await
}
