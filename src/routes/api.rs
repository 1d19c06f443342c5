use actix_web::{HttpResponse, Responder, get, web};

use crate::db::DbPool;
use crate::repository::DieselRepository;
use crate::services::api::{CatalogQueryParams, list_catalog};

#[get("/api/products")]
pub async fn api_products(
    params: web::Query<CatalogQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match list_catalog(params.into_inner(), &repo) {
        Ok(products) => HttpResponse::Ok().json(products),
        // The cause is already logged in the service; the client gets a
        // generic failure body.
        Err(_) => HttpResponse::InternalServerError()
            .json(serde_json::json!({ "error": "Failed to fetch products" })),
    }
}
