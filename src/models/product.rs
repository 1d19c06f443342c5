use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::product::{
    Product as DomainProduct, ProductFields, ProductImage as DomainProductImage,
    ProductVideo as DomainProductVideo,
};
use crate::domain::types::{
    ModelUrl, ProductDescription, ProductName, ProductPrice, ProductSlug, StockCount, StockStatus,
    StockThreshold, TypeConstraintError,
};

/// Diesel model representing the `products` table.
///
/// `tags` and `metadata` are JSON-encoded text columns; they are decoded when
/// converting into the domain entity.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub ai_description: Option<String>,
    pub tags: String,
    pub category_id: i32,
    pub stock_count: i32,
    pub low_stock_threshold: i32,
    pub stock_status: String,
    pub featured: bool,
    pub model_url: Option<String>,
    pub metadata: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`]. Timestamps come from column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub slug: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub ai_description: Option<String>,
    pub tags: String,
    pub category_id: i32,
    pub stock_count: i32,
    pub low_stock_threshold: i32,
    pub stock_status: String,
    pub featured: bool,
    pub model_url: Option<String>,
    pub metadata: Option<String>,
}

/// Scalar changeset applied when a product with the same slug already
/// exists. `None` values overwrite with NULL: an update replaces the whole
/// scalar row, it does not patch.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChanges {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub ai_description: Option<String>,
    pub tags: String,
    pub category_id: i32,
    pub stock_count: i32,
    pub low_stock_threshold: i32,
    pub stock_status: String,
    pub featured: bool,
    pub model_url: Option<String>,
    pub metadata: Option<String>,
}

fn encode_tags(tags: &[String]) -> Result<String, TypeConstraintError> {
    serde_json::to_string(tags)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("tags: {e}")))
}

fn decode_tags(raw: &str) -> Result<Vec<String>, TypeConstraintError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| TypeConstraintError::InvalidValue(format!("tags: {e}")))
}

fn encode_metadata(
    metadata: Option<&serde_json::Value>,
) -> Result<Option<String>, TypeConstraintError> {
    metadata
        .map(|value| {
            serde_json::to_string(value)
                .map_err(|e| TypeConstraintError::InvalidValue(format!("metadata: {e}")))
        })
        .transpose()
}

fn decode_metadata(raw: Option<&str>) -> Result<Option<serde_json::Value>, TypeConstraintError> {
    raw.map(|value| {
        serde_json::from_str(value)
            .map_err(|e| TypeConstraintError::InvalidValue(format!("metadata: {e}")))
    })
    .transpose()
}

impl Product {
    /// Assembles the domain entity from the row plus its separately loaded
    /// category and media collections.
    pub fn into_domain(
        self,
        category: DomainCategory,
        images: Vec<DomainProductImage>,
        videos: Vec<DomainProductVideo>,
    ) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            id: self.id.try_into()?,
            slug: ProductSlug::new(self.slug)?,
            name: ProductName::new(self.name)?,
            price: ProductPrice::new(self.price)?,
            description: self.description.map(ProductDescription::new).transpose()?,
            ai_description: self
                .ai_description
                .map(ProductDescription::new)
                .transpose()?,
            tags: decode_tags(&self.tags)?,
            category_id: self.category_id.try_into()?,
            category,
            stock_count: StockCount::new(self.stock_count)?,
            low_stock_threshold: StockThreshold::new(self.low_stock_threshold)?,
            stock_status: StockStatus::try_from(self.stock_status)?,
            featured: self.featured,
            model_url: self.model_url.map(ModelUrl::new).transpose()?,
            metadata: decode_metadata(self.metadata.as_deref())?,
            images,
            videos,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl NewProduct {
    /// Builds the insertable row; the stock status is derived here, never
    /// taken from the caller.
    pub fn from_fields(
        slug: &ProductSlug,
        fields: &ProductFields,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            slug: slug.as_str().to_string(),
            name: fields.name.as_str().to_string(),
            price: fields.price.get(),
            description: fields.description.as_ref().map(|d| d.as_str().to_string()),
            ai_description: fields
                .ai_description
                .as_ref()
                .map(|d| d.as_str().to_string()),
            tags: encode_tags(&fields.tags)?,
            category_id: fields.category_id.get(),
            stock_count: fields.stock_count.get(),
            low_stock_threshold: fields.low_stock_threshold.get(),
            stock_status: fields.stock_status().as_str().to_string(),
            featured: fields.featured,
            model_url: fields.model_url.as_ref().map(|url| url.as_str().to_string()),
            metadata: encode_metadata(fields.metadata.as_ref())?,
        })
    }
}

impl ProductChanges {
    /// Builds the scalar changeset; slug and timestamps are handled by the
    /// repository, the stock status is derived from the figures.
    pub fn from_fields(fields: &ProductFields) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: fields.name.as_str().to_string(),
            price: fields.price.get(),
            description: fields.description.as_ref().map(|d| d.as_str().to_string()),
            ai_description: fields
                .ai_description
                .as_ref()
                .map(|d| d.as_str().to_string()),
            tags: encode_tags(&fields.tags)?,
            category_id: fields.category_id.get(),
            stock_count: fields.stock_count.get(),
            low_stock_threshold: fields.low_stock_threshold.get(),
            stock_status: fields.stock_status().as_str().to_string(),
            featured: fields.featured,
            model_url: fields.model_url.as_ref().map(|url| url.as_str().to_string()),
            metadata: encode_metadata(fields.metadata.as_ref())?,
        })
    }
}
