use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::db::DbPool;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::api::{CatalogQueryParams, list_catalog};
use crate::services::products::show_product;

/// Catalog listing page; shares the filter contract with the JSON endpoint.
#[get("/products")]
pub async fn products_page(
    params: web::Query<CatalogQueryParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());
    let category = params.category.clone();

    let products = match list_catalog(params.into_inner(), &repo) {
        Ok(products) => products,
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };

    let mut context = Context::new();
    context.insert("current_page", "products");
    context.insert("category", &category);
    context.insert("products", &products);

    render_template(&tera, "products/index.html", &context)
}

#[derive(Deserialize, Debug)]
pub struct ProductPageQuery {
    /// AR auto-open navigation parameter; only the literal `"true"` arms it.
    pub ar: Option<String>,
}

#[get("/products/{slug}")]
pub async fn product_page(
    path: web::Path<String>,
    query: web::Query<ProductPageQuery>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselRepository::new(pool.get_ref().clone());

    match show_product(&path, query.ar.as_deref(), &repo) {
        Ok((product, ar_viewer)) => {
            let mut context = Context::new();
            context.insert("current_page", "product");
            context.insert("product", &product);
            context.insert("ar_viewer", &ar_viewer);
            render_template(&tera, "products/show.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}
