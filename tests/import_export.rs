use serde_json::json;

use vitrine::domain::export::CatalogExport;
use vitrine::repository::{
    CategoryReader, DeepLinkReader, DieselRepository, ProductListQuery, ProductReader,
};
use vitrine::services::import_export::{export_catalog, import_catalog};

mod common;

fn artifact() -> CatalogExport {
    // Built from the wire shape on purpose: imports consume documents that
    // another system serialized, not structs this crate constructed.
    serde_json::from_value(json!({
        "exportedAt": "2025-07-01T12:00:00Z",
        "categories": [
            {
                "name": "Chairs",
                "slug": "chairs",
                "description": "Seating for the studio",
                "image": null,
                "order": 1
            },
            {
                "name": "Desks",
                "slug": "desks",
                "description": null,
                "image": null,
                "order": 2
            }
        ],
        "products": [
            {
                "name": "Office Chair",
                "slug": "office-chair",
                "price": 149.0,
                "description": "Adjustable height",
                "aiDescription": "A chair that keeps your back happy",
                "tags": ["ergonomic", "mesh"],
                "categorySlug": "chairs",
                "stockCount": 3,
                "lowStockThreshold": 5,
                "featured": true,
                "modelUrl": "https://cdn.example.com/models/office-chair.glb",
                "metadata": {"color": "black"},
                "images": [
                    {"url": "https://cdn.example.com/office-chair-1.jpg", "alt": "Front", "order": 1, "is360": false},
                    {"url": "https://cdn.example.com/office-chair-360.jpg", "alt": null, "order": 2, "is360": true}
                ],
                "videos": [
                    {"url": "https://cdn.example.com/office-chair.mp4", "thumbnail": null, "order": 1}
                ]
            },
            {
                "name": "Floor Lamp",
                "slug": "floor-lamp",
                "price": 79.0,
                "description": null,
                "aiDescription": null,
                "tags": [],
                "categorySlug": "lighting",
                "stockCount": 0,
                "lowStockThreshold": 2,
                "featured": false,
                "modelUrl": null,
                "metadata": null,
                "images": [],
                "videos": []
            }
        ],
        "deepLinks": [
            {
                "name": "Chair Wall",
                "slug": "chair-wall",
                "categorySlug": "chairs",
                "description": "QR target in the showroom",
                "order": 1,
                "isActive": true
            },
            {
                "name": "Everything",
                "slug": "everything",
                "categorySlug": null,
                "description": null,
                "order": 2,
                "isActive": false
            }
        ]
    }))
    .expect("artifact should deserialize")
}

#[test]
fn import_replays_wire_artifact() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let report = import_catalog(&artifact(), &repo).expect("import should succeed");

    assert_eq!(report.categories, 2);
    assert_eq!(report.products_created, 1);
    // "floor-lamp" references a category the document never declares
    assert_eq!(report.products_skipped, 1);
    assert_eq!(report.deep_links, 2);

    let products = repo
        .list_products(ProductListQuery::default())
        .expect("should list products");
    assert_eq!(products.len(), 1);

    let chair = &products[0];
    assert_eq!(chair.slug.as_str(), "office-chair");
    assert_eq!(chair.category.slug.as_str(), "chairs");
    assert_eq!(chair.tags, vec!["ergonomic".to_string(), "mesh".to_string()]);
    assert_eq!(chair.images.len(), 2);
    assert!(chair.images[1].is_360);
    assert_eq!(chair.videos.len(), 1);
    assert_eq!(
        chair.metadata,
        Some(json!({"color": "black"}))
    );
    // 0 < 3 <= 5, so the derived status is LOW_STOCK whatever the source said
    assert_eq!(chair.stock_status.as_str(), "LOW_STOCK");

    let links = repo.list_deep_links().expect("should list deep links");
    assert_eq!(links.len(), 2);
    let chair_wall = links.iter().find(|l| l.slug.as_str() == "chair-wall").unwrap();
    assert_eq!(chair_wall.category_id, Some(chair.category.id));
    let everything = links.iter().find(|l| l.slug.as_str() == "everything").unwrap();
    assert_eq!(everything.category_id, None);
}

#[test]
fn importing_twice_creates_no_duplicates() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = import_catalog(&artifact(), &repo).expect("first import");
    let second = import_catalog(&artifact(), &repo).expect("second import");

    assert_eq!(first.products_created, 1);
    assert_eq!(second.products_created, 0);
    assert_eq!(second.products_updated, 1);

    assert_eq!(repo.list_categories().expect("list").len(), 2);
    assert_eq!(
        repo.list_products(ProductListQuery::default())
            .expect("list")
            .len(),
        1
    );
    assert_eq!(repo.list_deep_links().expect("list").len(), 2);

    // media was replaced, not appended
    let products = repo.list_products(ProductListQuery::default()).expect("list");
    assert_eq!(products[0].images.len(), 2);
    assert_eq!(products[0].videos.len(), 1);
}

#[test]
fn export_round_trips_to_a_second_database() {
    let source_db = common::TestDb::new();
    let source = DieselRepository::new(source_db.pool());
    import_catalog(&artifact(), &source).expect("seed source");

    let snapshot = export_catalog(&source).expect("export should succeed");
    assert_eq!(snapshot.categories.len(), 2);
    assert_eq!(snapshot.products.len(), 1);
    assert_eq!(snapshot.products[0].category_slug, "chairs");
    assert_eq!(
        snapshot.deep_links.iter().find(|l| l.slug == "chair-wall").unwrap().category_slug.as_deref(),
        Some("chairs")
    );

    let destination_db = common::TestDb::new();
    let destination = DieselRepository::new(destination_db.pool());
    let report = import_catalog(&snapshot, &destination).expect("import into destination");

    assert_eq!(report.categories, 2);
    assert_eq!(report.products_created, 1);
    assert_eq!(report.products_skipped, 0);

    let products = destination
        .list_products(ProductListQuery::default())
        .expect("should list products");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].slug.as_str(), "office-chair");
    assert_eq!(products[0].images.len(), 2);
    assert_eq!(products[0].videos.len(), 1);
    // destination assigned its own keys; the slug relation still holds
    assert_eq!(products[0].category.slug.as_str(), "chairs");
}

#[test]
fn artifact_serialization_round_trips() {
    let export = artifact();
    let raw = serde_json::to_string_pretty(&export).expect("serialize");
    let parsed: CatalogExport = serde_json::from_str(&raw).expect("reparse");

    assert_eq!(parsed.categories.len(), export.categories.len());
    assert_eq!(parsed.products.len(), export.products.len());
    assert_eq!(parsed.products[0].slug, export.products[0].slug);
    assert_eq!(parsed.deep_links.len(), export.deep_links.len());
}
