use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{
    CategoryId, ImageUrl, ModelUrl, ProductDescription, ProductId, ProductName, ProductPrice,
    ProductSlug, StockCount, StockStatus, StockThreshold, VideoUrl,
};

/// A storefront product with its expanded category and owned media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub slug: ProductSlug,
    pub name: ProductName,
    pub price: ProductPrice,
    pub description: Option<ProductDescription>,
    /// Generated marketing copy, searchable alongside the description.
    pub ai_description: Option<ProductDescription>,
    pub tags: Vec<String>,
    pub category_id: CategoryId,
    pub category: Category,
    pub stock_count: StockCount,
    pub low_stock_threshold: StockThreshold,
    pub stock_status: StockStatus,
    pub featured: bool,
    pub model_url: Option<ModelUrl>,
    pub metadata: Option<serde_json::Value>,
    /// Ordered by display position ascending.
    pub images: Vec<ProductImage>,
    /// Ordered by display position ascending.
    pub videos: Vec<ProductVideo>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An image owned by exactly one product. Replaced wholesale on update,
/// never diffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: ProductId,
    pub url: ImageUrl,
    pub alt: Option<String>,
    pub position: i32,
    pub is_360: bool,
}

/// A video owned by exactly one product. Same replacement policy as images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVideo {
    pub id: i32,
    pub product_id: ProductId,
    pub url: VideoUrl,
    pub thumbnail: Option<ImageUrl>,
    pub position: i32,
}

/// Scalar fields shared by product create and update paths.
///
/// `stock_status` is intentionally absent: callers derive it from the stock
/// figures via [`StockStatus::derive`], never supply it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductFields {
    pub name: ProductName,
    pub price: ProductPrice,
    pub description: Option<ProductDescription>,
    pub ai_description: Option<ProductDescription>,
    pub tags: Vec<String>,
    pub category_id: CategoryId,
    pub stock_count: StockCount,
    pub low_stock_threshold: StockThreshold,
    pub featured: bool,
    pub model_url: Option<ModelUrl>,
    pub metadata: Option<serde_json::Value>,
}

impl ProductFields {
    /// The derived availability for these stock figures.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::derive(self.stock_count, self.low_stock_threshold)
    }
}

/// Information required to create a new [`Product`] together with its owned
/// media in one composite write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub slug: ProductSlug,
    pub fields: ProductFields,
    pub images: Vec<NewProductImage>,
    pub videos: Vec<NewProductVideo>,
}

/// Image payload for composite creates and wholesale replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProductImage {
    pub url: ImageUrl,
    pub alt: Option<String>,
    pub position: i32,
    pub is_360: bool,
}

/// Video payload for composite creates and wholesale replacement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProductVideo {
    pub url: VideoUrl,
    pub thumbnail: Option<ImageUrl>,
    pub position: i32,
}
