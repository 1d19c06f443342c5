use std::collections::HashMap;

use chrono::Utc;

use crate::domain::category::NewCategory;
use crate::domain::deep_link::NewDeepLink;
use crate::domain::export::{CatalogExport, CategoryExport, DeepLinkExport, ProductExport};
use crate::domain::product::{NewProduct, NewProductImage, NewProductVideo, ProductFields};
use crate::domain::types::{CategoryId, TypeConstraintError};
use crate::repository::{
    CategoryReader, CategoryWriter, DeepLinkReader, DeepLinkWriter, ProductListQuery,
    ProductReader, ProductWriter,
};

use super::{ServiceError, ServiceResult};

/// Aggregated import outcome, reported to the operator at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub categories: usize,
    pub products_created: usize,
    pub products_updated: usize,
    pub products_skipped: usize,
    pub deep_links: usize,
}

/// Snapshots the full catalog into the portable artifact.
///
/// Categories come first so deep link projection can resolve category
/// references from the in-memory list instead of issuing per-link queries.
/// Any read failure aborts the whole export; a partial artifact is worthless.
pub fn export_catalog<R>(repo: &R) -> ServiceResult<CatalogExport>
where
    R: CategoryReader + ProductReader + DeepLinkReader,
{
    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to read categories: {e}");
        ServiceError::Internal
    })?;
    log::info!("Exported {} categories", categories.len());

    let products = repo
        .list_products(ProductListQuery::default())
        .map_err(|e| {
            log::error!("Failed to read products: {e}");
            ServiceError::Internal
        })?;
    log::info!("Exported {} products", products.len());

    let deep_links = repo.list_deep_links().map_err(|e| {
        log::error!("Failed to read deep links: {e}");
        ServiceError::Internal
    })?;
    log::info!("Exported {} deep links", deep_links.len());

    Ok(CatalogExport {
        exported_at: Utc::now(),
        products: products.iter().map(ProductExport::from).collect(),
        deep_links: deep_links
            .iter()
            .map(|link| DeepLinkExport::project(link, &categories))
            .collect(),
        categories: categories.iter().map(CategoryExport::from).collect(),
    })
}

fn product_fields(
    record: &ProductExport,
    category_id: CategoryId,
) -> Result<ProductFields, TypeConstraintError> {
    let (description, ai_description) = record.descriptions()?;
    let (stock_count, low_stock_threshold) = record.stock_figures()?;
    Ok(ProductFields {
        name: record.product_name()?,
        price: record.product_price()?,
        description,
        ai_description,
        tags: record.tags.clone(),
        category_id,
        stock_count,
        low_stock_threshold,
        featured: record.featured,
        model_url: record.model()?,
        metadata: record.metadata.clone(),
    })
}

/// Replays a previously exported artifact into the destination database.
///
/// Strictly ordered: categories first (building the slug-to-id map the later
/// steps resolve references through), then products, then deep links. A
/// product whose category slug is missing from the map is skipped with a
/// warning; every other failure aborts the run. The artifact never supplies
/// a stock status, it is derived from the imported stock figures. Image and
/// video collections are both replaced wholesale on update.
pub fn import_catalog<R>(export: &CatalogExport, repo: &R) -> ServiceResult<ImportReport>
where
    R: CategoryWriter + ProductReader + ProductWriter + DeepLinkWriter,
{
    let mut report = ImportReport::default();
    let mut category_ids: HashMap<String, CategoryId> = HashMap::new();

    for record in &export.categories {
        let new_category = NewCategory::try_from(record).map_err(|e| {
            log::error!("Invalid category record \"{}\": {e}", record.slug);
            ServiceError::Internal
        })?;
        let stored = repo.upsert_category(&new_category).map_err(|e| {
            log::error!("Failed to upsert category \"{}\": {e}", record.slug);
            ServiceError::Internal
        })?;
        // Later steps resolve references through this map, never through the
        // source system's identifiers.
        category_ids.insert(stored.slug.as_str().to_string(), stored.id);
        log::info!("Imported category {}", stored.name);
        report.categories += 1;
    }

    for record in &export.products {
        let Some(category_id) = category_ids.get(record.category_slug.as_str()).copied() else {
            log::warn!(
                "Skipping product \"{}\": category \"{}\" not found",
                record.name,
                record.category_slug
            );
            report.products_skipped += 1;
            continue;
        };

        let invalid = |e: TypeConstraintError| {
            log::error!("Invalid product record \"{}\": {e}", record.slug);
            ServiceError::Internal
        };
        let slug = record.product_slug().map_err(invalid)?;
        let fields = product_fields(record, category_id).map_err(invalid)?;
        let images = record
            .images
            .iter()
            .map(NewProductImage::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;
        let videos = record
            .videos
            .iter()
            .map(NewProductVideo::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        let existing = repo.get_product_by_slug(&slug).map_err(|e| {
            log::error!("Failed to look up product \"{slug}\": {e}");
            ServiceError::Internal
        })?;

        let failed = |e| {
            log::error!("Failed to import product \"{}\": {e}", record.slug);
            ServiceError::Internal
        };
        match existing {
            Some(existing) => {
                repo.update_product(existing.id, &fields).map_err(failed)?;
                repo.replace_product_images(existing.id, &images)
                    .map_err(failed)?;
                repo.replace_product_videos(existing.id, &videos)
                    .map_err(failed)?;
                log::info!("Updated product {}", fields.name);
                report.products_updated += 1;
            }
            None => {
                let name = fields.name.clone();
                repo.create_product(&NewProduct {
                    slug,
                    fields,
                    images,
                    videos,
                })
                .map_err(failed)?;
                log::info!("Created product {name}");
                report.products_created += 1;
            }
        }
    }

    for record in &export.deep_links {
        // An absent category stays null; resolution goes through the same
        // map the category step built.
        let category_id = record
            .category_slug
            .as_deref()
            .and_then(|slug| category_ids.get(slug).copied());

        let invalid = |e: TypeConstraintError| {
            log::error!("Invalid deep link record \"{}\": {e}", record.slug);
            ServiceError::Internal
        };
        let new_link = NewDeepLink {
            slug: record.deep_link_slug().map_err(invalid)?,
            name: record.deep_link_name().map_err(invalid)?,
            category_id,
            description: record.description.clone(),
            position: record.order,
            is_active: record.is_active,
        };

        let stored = repo.upsert_deep_link(&new_link).map_err(|e| {
            log::error!("Failed to upsert deep link \"{}\": {e}", record.slug);
            ServiceError::Internal
        })?;
        log::info!("Imported deep link {}", stored.name);
        report.deep_links += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::export::{ImageExport, VideoExport};
    use crate::domain::types::StockStatus;
    use crate::repository::test::TestRepository;

    fn category_record(slug: &str) -> CategoryExport {
        CategoryExport {
            name: "Chairs".into(),
            slug: slug.into(),
            description: Some("Seating".into()),
            image: None,
            order: 1,
        }
    }

    fn product_record(slug: &str, category_slug: &str) -> ProductExport {
        ProductExport {
            name: "Office Chair".into(),
            slug: slug.into(),
            price: 149.0,
            description: Some("Adjustable".into()),
            ai_description: None,
            tags: vec!["ergonomic".into()],
            category_slug: category_slug.into(),
            stock_count: 10,
            low_stock_threshold: 5,
            featured: true,
            model_url: None,
            metadata: None,
            images: vec![ImageExport {
                url: "https://example.com/chair.jpg".into(),
                alt: Some("Front view".into()),
                order: 0,
                is_360: false,
            }],
            videos: vec![VideoExport {
                url: "https://example.com/chair.mp4".into(),
                thumbnail: None,
                order: 0,
            }],
        }
    }

    fn deep_link_record(slug: &str, category_slug: Option<&str>) -> DeepLinkExport {
        DeepLinkExport {
            name: "Spring Sale".into(),
            slug: slug.into(),
            category_slug: category_slug.map(Into::into),
            description: None,
            order: 0,
            is_active: true,
        }
    }

    fn artifact(
        categories: Vec<CategoryExport>,
        products: Vec<ProductExport>,
        deep_links: Vec<DeepLinkExport>,
    ) -> CatalogExport {
        CatalogExport {
            exported_at: Utc::now(),
            categories,
            products,
            deep_links,
        }
    }

    #[test]
    fn import_twice_is_idempotent() {
        let repo = TestRepository::new();
        let export = artifact(
            vec![category_record("chairs")],
            vec![product_record("office-chair", "chairs")],
            vec![deep_link_record("spring-sale", Some("chairs"))],
        );

        let first = import_catalog(&export, &repo).unwrap();
        assert_eq!(first.categories, 1);
        assert_eq!(first.products_created, 1);
        assert_eq!(first.products_updated, 0);
        assert_eq!(first.deep_links, 1);

        let second = import_catalog(&export, &repo).unwrap();
        assert_eq!(second.products_created, 0);
        assert_eq!(second.products_updated, 1);

        let products = repo.list_products(ProductListQuery::default()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].images.len(), 1);
        assert_eq!(products[0].videos.len(), 1);
        assert_eq!(repo.list_categories().unwrap().len(), 1);
        assert_eq!(repo.list_deep_links().unwrap().len(), 1);
    }

    #[test]
    fn unresolvable_category_skips_product_but_continues() {
        let repo = TestRepository::new();
        let export = artifact(
            vec![category_record("chairs")],
            vec![
                product_record("ghost-product", "desks"),
                product_record("office-chair", "chairs"),
            ],
            vec![deep_link_record("spring-sale", None)],
        );

        let report = import_catalog(&export, &repo).unwrap();

        assert_eq!(report.products_skipped, 1);
        assert_eq!(report.products_created, 1);
        assert_eq!(report.deep_links, 1);
        let products = repo.list_products(ProductListQuery::default()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].slug, "office-chair");
    }

    #[test]
    fn stock_status_is_recomputed_from_figures() {
        let repo = TestRepository::new();
        let mut sold_out = product_record("sold-out", "chairs");
        sold_out.stock_count = 0;
        let mut low = product_record("low-stock", "chairs");
        low.stock_count = 5;
        let mut available = product_record("available", "chairs");
        available.stock_count = 6;

        let export = artifact(
            vec![category_record("chairs")],
            vec![sold_out, low, available],
            vec![],
        );
        import_catalog(&export, &repo).unwrap();

        let products = repo.list_products(ProductListQuery::default()).unwrap();
        let status_of = |slug: &str| {
            products
                .iter()
                .find(|p| p.slug == slug)
                .map(|p| p.stock_status)
                .unwrap()
        };
        assert_eq!(status_of("sold-out"), StockStatus::OutOfStock);
        assert_eq!(status_of("low-stock"), StockStatus::LowStock);
        assert_eq!(status_of("available"), StockStatus::Available);
    }

    #[test]
    fn media_collections_are_replaced_symmetrically() {
        let repo = TestRepository::new();
        let export = artifact(
            vec![category_record("chairs")],
            vec![product_record("office-chair", "chairs")],
            vec![],
        );
        import_catalog(&export, &repo).unwrap();

        let mut stripped = product_record("office-chair", "chairs");
        stripped.images = vec![];
        stripped.videos = vec![];
        let export = artifact(vec![category_record("chairs")], vec![stripped], vec![]);
        import_catalog(&export, &repo).unwrap();

        let products = repo.list_products(ProductListQuery::default()).unwrap();
        assert!(products[0].images.is_empty());
        assert!(products[0].videos.is_empty());
    }

    #[test]
    fn export_then_import_round_trips() {
        let source = TestRepository::new();
        let export = artifact(
            vec![category_record("chairs")],
            vec![product_record("office-chair", "chairs")],
            vec![deep_link_record("spring-sale", Some("chairs"))],
        );
        import_catalog(&export, &source).unwrap();

        let snapshot = export_catalog(&source).unwrap();
        assert_eq!(snapshot.categories.len(), 1);
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].category_slug, "chairs");
        assert_eq!(
            snapshot.deep_links[0].category_slug.as_deref(),
            Some("chairs")
        );

        let destination = TestRepository::new();
        let report = import_catalog(&snapshot, &destination).unwrap();
        assert_eq!(report.products_created, 1);

        let products = destination
            .list_products(ProductListQuery::default())
            .unwrap();
        assert_eq!(products[0].slug, "office-chair");
        assert_eq!(products[0].category.slug, "chairs");
        assert_eq!(products[0].images.len(), 1);
    }

    #[test]
    fn export_aborts_on_read_failure() {
        let repo = TestRepository::failing();
        assert_eq!(export_catalog(&repo).unwrap_err(), ServiceError::Internal);
    }
}
