use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::{CategoryName, ModelUrl, ProductId, ProductName, ProductSlug};
use crate::repository::ProductReader;

use super::{ServiceError, ServiceResult};

/// Everything the AR viewer needs to open for a product.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArViewer {
    pub product_id: ProductId,
    pub product_name: ProductName,
    pub product_category: CategoryName,
    pub model_url: Option<ModelUrl>,
}

/// Decides whether the product page opens straight into the AR viewer.
///
/// Only the exact literal `"true"` arms it; `"1"`, `"True"` or an absent
/// parameter render nothing. The check is deliberately strict because QR
/// codes encode the parameter verbatim.
pub fn ar_viewer(product: &Product, ar_param: Option<&str>) -> Option<ArViewer> {
    if ar_param != Some("true") {
        return None;
    }
    Some(ArViewer {
        product_id: product.id,
        product_name: product.name.clone(),
        product_category: product.category.name.clone(),
        model_url: product.model_url.clone(),
    })
}

/// Core business logic for the product detail page.
///
/// Looks the product up by slug and evaluates the AR auto-open trigger from
/// the navigation parameter. Repository errors are converted into
/// `ServiceError` variants so that the HTTP route can remain a thin wrapper.
pub fn show_product<R>(
    slug: &str,
    ar_param: Option<&str>,
    repo: &R,
) -> ServiceResult<(Product, Option<ArViewer>)>
where
    R: ProductReader,
{
    let slug = match ProductSlug::new(slug) {
        Ok(slug) => slug,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let product = match repo.get_product_by_slug(&slug) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let viewer = ar_viewer(&product, ar_param);
    Ok((product, viewer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewCategory;
    use crate::domain::product::{NewProduct, ProductFields};
    use crate::domain::types::{
        CategoryId, CategoryName, ModelUrl, ProductPrice, StockCount, StockThreshold,
    };
    use crate::repository::test::TestRepository;
    use crate::repository::{CategoryWriter, ProductWriter};

    fn sample_category(slug: &str) -> NewCategory {
        NewCategory {
            slug: slug.try_into().unwrap(),
            name: CategoryName::new("Chairs").unwrap(),
            description: None,
            image: None,
            position: 0,
        }
    }

    fn sample_product(slug: &str, category_id: CategoryId) -> NewProduct {
        NewProduct {
            slug: slug.try_into().unwrap(),
            fields: ProductFields {
                name: "Office Chair".try_into().unwrap(),
                price: ProductPrice::new(149.0).unwrap(),
                description: None,
                ai_description: None,
                tags: vec![],
                category_id,
                stock_count: StockCount::new(10).unwrap(),
                low_stock_threshold: StockThreshold::new(5).unwrap(),
                featured: false,
                model_url: Some(ModelUrl::new("https://example.com/chair.glb").unwrap()),
                metadata: None,
            },
            images: vec![],
            videos: vec![],
        }
    }

    fn seeded_repo() -> TestRepository {
        let repo = TestRepository::new();
        let category = repo.create_category(&sample_category("chairs")).unwrap();
        repo.create_product(&sample_product("office-chair", category.id))
            .unwrap();
        repo
    }

    #[test]
    fn arms_viewer_for_exact_literal_true() {
        let repo = seeded_repo();
        let (product, viewer) = show_product("office-chair", Some("true"), &repo).unwrap();

        let viewer = viewer.expect("viewer should be armed");
        assert_eq!(viewer.product_id, product.id);
        assert_eq!(viewer.product_category, product.category.name);
        assert_eq!(
            viewer.model_url.as_ref().map(|m| m.as_str()),
            Some("https://example.com/chair.glb")
        );
    }

    #[test]
    fn renders_nothing_for_other_values() {
        let repo = seeded_repo();
        for param in [None, Some("1"), Some("True"), Some("false"), Some("")] {
            let (_, viewer) = show_product("office-chair", param, &repo).unwrap();
            assert!(viewer.is_none(), "param {param:?} must not arm the viewer");
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let repo = seeded_repo();
        assert_eq!(
            show_product("missing", None, &repo).unwrap_err(),
            ServiceError::NotFound
        );
    }
}
