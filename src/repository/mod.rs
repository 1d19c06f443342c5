use crate::db::{DbConnection, DbPool};

use crate::domain::category::{Category, NewCategory};
use crate::domain::deep_link::{DeepLink, NewDeepLink};
use crate::domain::product::{
    NewProduct, NewProductImage, NewProductVideo, Product, ProductFields,
};
use crate::domain::types::{CategorySlug, ProductId, ProductSlug};

pub mod category;
pub mod deep_link;
pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing catalog products.
///
/// Every field is optional; supplied filters apply as a conjunction, an
/// absent field constrains nothing.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Restrict to a category, addressed by slug.
    pub category: Option<CategorySlug>,
    /// Restrict on the featured flag.
    pub featured: Option<bool>,
    /// Case-insensitive free-text search over name and description fields.
    pub search: Option<String>,
}

impl ProductListQuery {
    pub fn category(mut self, slug: CategorySlug) -> Self {
        self.category = Some(slug);
        self
    }
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by display position.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its slug.
    fn get_category_by_slug(&self, slug: &CategorySlug) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category, returning the stored record.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Insert the category or, when the slug already exists, update its
    /// name, description, image and position. Returns the destination row
    /// so callers learn the local identifier behind the slug.
    fn upsert_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching the supplied query, newest first, each with
    /// its category and position-ordered media expanded.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its slug.
    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities and their owned media.
pub trait ProductWriter {
    /// Persist a product together with its image and video collections in
    /// one composite write.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Update the scalar fields of an existing product. The slug is stable;
    /// the stock status is derived from the supplied figures.
    fn update_product(&self, id: ProductId, fields: &ProductFields) -> RepositoryResult<usize>;
    /// Replace the product's image collection wholesale.
    fn replace_product_images(
        &self,
        id: ProductId,
        images: &[NewProductImage],
    ) -> RepositoryResult<usize>;
    /// Replace the product's video collection wholesale.
    fn replace_product_videos(
        &self,
        id: ProductId,
        videos: &[NewProductVideo],
    ) -> RepositoryResult<usize>;
}

/// Read-only operations for deep link entities.
pub trait DeepLinkReader {
    /// List all deep links ordered by display position.
    fn list_deep_links(&self) -> RepositoryResult<Vec<DeepLink>>;
}

/// Write operations for deep link entities.
pub trait DeepLinkWriter {
    /// Insert the deep link or update it in place when the slug exists.
    fn upsert_deep_link(&self, link: &NewDeepLink) -> RepositoryResult<DeepLink>;
}
