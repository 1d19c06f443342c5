use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::repository::{CategoryReader, ProductListQuery, ProductReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the storefront index page.
///
/// Fetches the category list and the featured product selection. Repository
/// errors are translated into `ServiceError` so that the HTTP route can
/// remain a thin wrapper.
pub fn show_index<R>(repo: &R) -> ServiceResult<(Vec<Category>, Vec<Product>)>
where
    R: CategoryReader + ProductReader,
{
    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let featured = match repo.list_products(ProductListQuery::default().featured(true)) {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list featured products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok((categories, featured))
}
