use serde::Deserialize;

use crate::domain::product::Product;
use crate::domain::types::CategorySlug;
use crate::repository::{ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

/// Query parameters accepted by the catalog products endpoint.
#[derive(Deserialize, Debug, Default)]
pub struct CatalogQueryParams {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub search: Option<String>,
}

/// Core business logic for the `/api/products` endpoint.
///
/// Translates the raw query parameters into a repository filter conjunction:
/// an absent parameter constrains nothing. `featured` only filters when the
/// raw value is exactly the literal `"true"`; a category that is not a valid
/// slug matches no products. Repository errors are logged here and collapsed
/// into an opaque `ServiceError` so the route never leaks the cause.
pub fn list_catalog<R>(params: CatalogQueryParams, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    let mut query = ProductListQuery::default();

    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        match CategorySlug::new(category) {
            Ok(slug) => query = query.category(slug),
            Err(_) => return Ok(Vec::new()),
        }
    }

    if params.featured.as_deref() == Some("true") {
        query = query.featured(true);
    }

    if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
        query = query.search(search);
    }

    match repo.list_products(query) {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}
