//! The portable catalog snapshot moved between database instances.
//!
//! One schema serves both directions: the export routine writes it, the
//! import routine replays it. Cross-references are carried as slugs, never as
//! primary keys, so the artifact survives a move to a database with a
//! different key space. Field values stay raw primitives here; validation
//! into domain newtypes happens when the import converts each record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, NewCategory};
use crate::domain::deep_link::DeepLink;
use crate::domain::product::{NewProductImage, NewProductVideo, Product};
use crate::domain::types::{
    CategoryName, CategorySlug, DeepLinkName, DeepLinkSlug, ImageUrl, ModelUrl,
    ProductDescription, ProductName, ProductPrice, ProductSlug, StockCount, StockThreshold,
    TypeConstraintError, VideoUrl,
};

/// Top-level export artifact, serialized as a single JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExport {
    pub exported_at: DateTime<Utc>,
    pub categories: Vec<CategoryExport>,
    pub products: Vec<ProductExport>,
    pub deep_links: Vec<DeepLinkExport>,
}

/// Category snapshot. No primary key: the slug is the only identity that
/// crosses systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExport {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub order: i32,
}

/// Product snapshot with the category reference replaced by its slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductExport {
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub description: Option<String>,
    pub ai_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_slug: String,
    pub stock_count: i32,
    pub low_stock_threshold: i32,
    pub featured: bool,
    pub model_url: Option<String>,
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub images: Vec<ImageExport>,
    #[serde(default)]
    pub videos: Vec<VideoExport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageExport {
    pub url: String,
    pub alt: Option<String>,
    pub order: i32,
    #[serde(rename = "is360")]
    pub is_360: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoExport {
    pub url: String,
    pub thumbnail: Option<String>,
    pub order: i32,
}

/// Deep link snapshot; the optional category reference is carried as a slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLinkExport {
    pub name: String,
    pub slug: String,
    pub category_slug: Option<String>,
    pub description: Option<String>,
    pub order: i32,
    pub is_active: bool,
}

impl From<&Category> for CategoryExport {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.as_str().to_string(),
            slug: category.slug.as_str().to_string(),
            description: category.description.clone(),
            image: category.image.as_ref().map(|url| url.as_str().to_string()),
            order: category.position,
        }
    }
}

impl From<&Product> for ProductExport {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.as_str().to_string(),
            slug: product.slug.as_str().to_string(),
            price: product.price.get(),
            description: product.description.as_ref().map(|d| d.as_str().to_string()),
            ai_description: product
                .ai_description
                .as_ref()
                .map(|d| d.as_str().to_string()),
            tags: product.tags.clone(),
            // The internal category id is dropped here on purpose.
            category_slug: product.category.slug.as_str().to_string(),
            stock_count: product.stock_count.get(),
            low_stock_threshold: product.low_stock_threshold.get(),
            featured: product.featured,
            model_url: product.model_url.as_ref().map(|url| url.as_str().to_string()),
            metadata: product.metadata.clone(),
            images: product
                .images
                .iter()
                .map(|img| ImageExport {
                    url: img.url.as_str().to_string(),
                    alt: img.alt.clone(),
                    order: img.position,
                    is_360: img.is_360,
                })
                .collect(),
            videos: product
                .videos
                .iter()
                .map(|vid| VideoExport {
                    url: vid.url.as_str().to_string(),
                    thumbnail: vid.thumbnail.as_ref().map(|url| url.as_str().to_string()),
                    order: vid.position,
                })
                .collect(),
        }
    }
}

impl DeepLinkExport {
    /// Projects a deep link, resolving its optional category reference
    /// against the already-loaded category list rather than a fresh query.
    pub fn project(link: &DeepLink, categories: &[Category]) -> Self {
        let category_slug = link.category_id.and_then(|id| {
            categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.slug.as_str().to_string())
        });
        Self {
            name: link.name.as_str().to_string(),
            slug: link.slug.as_str().to_string(),
            category_slug,
            description: link.description.clone(),
            order: link.position,
            is_active: link.is_active,
        }
    }
}

impl TryFrom<&CategoryExport> for NewCategory {
    type Error = TypeConstraintError;

    fn try_from(record: &CategoryExport) -> Result<Self, Self::Error> {
        Ok(Self {
            slug: CategorySlug::new(record.slug.clone())?,
            name: CategoryName::new(record.name.clone())?,
            description: record.description.clone(),
            image: record
                .image
                .clone()
                .map(ImageUrl::new)
                .transpose()?,
            position: record.order,
        })
    }
}

impl TryFrom<&ImageExport> for NewProductImage {
    type Error = TypeConstraintError;

    fn try_from(record: &ImageExport) -> Result<Self, Self::Error> {
        Ok(Self {
            url: ImageUrl::new(record.url.clone())?,
            alt: record.alt.clone(),
            position: record.order,
            is_360: record.is_360,
        })
    }
}

impl TryFrom<&VideoExport> for NewProductVideo {
    type Error = TypeConstraintError;

    fn try_from(record: &VideoExport) -> Result<Self, Self::Error> {
        Ok(Self {
            url: VideoUrl::new(record.url.clone())?,
            thumbnail: record
                .thumbnail
                .clone()
                .map(ImageUrl::new)
                .transpose()?,
            position: record.order,
        })
    }
}

impl ProductExport {
    /// Validated slug of this snapshot.
    pub fn product_slug(&self) -> Result<ProductSlug, TypeConstraintError> {
        ProductSlug::new(self.slug.clone())
    }

    /// Validated name, used in operator-facing log lines.
    pub fn product_name(&self) -> Result<ProductName, TypeConstraintError> {
        ProductName::new(self.name.clone())
    }

    /// Validated price.
    pub fn product_price(&self) -> Result<ProductPrice, TypeConstraintError> {
        ProductPrice::new(self.price)
    }

    /// Validated description fields.
    pub fn descriptions(
        &self,
    ) -> Result<(Option<ProductDescription>, Option<ProductDescription>), TypeConstraintError>
    {
        let description = self
            .description
            .clone()
            .map(ProductDescription::new)
            .transpose()?;
        let ai_description = self
            .ai_description
            .clone()
            .map(ProductDescription::new)
            .transpose()?;
        Ok((description, ai_description))
    }

    /// Validated stock figures.
    pub fn stock_figures(&self) -> Result<(StockCount, StockThreshold), TypeConstraintError> {
        Ok((
            StockCount::new(self.stock_count)?,
            StockThreshold::new(self.low_stock_threshold)?,
        ))
    }

    /// Validated optional 3D model reference.
    pub fn model(&self) -> Result<Option<ModelUrl>, TypeConstraintError> {
        self.model_url.clone().map(ModelUrl::new).transpose()
    }
}

impl DeepLinkExport {
    /// Validated slug of this snapshot.
    pub fn deep_link_slug(&self) -> Result<DeepLinkSlug, TypeConstraintError> {
        DeepLinkSlug::new(self.slug.clone())
    }

    /// Validated display name.
    pub fn deep_link_name(&self) -> Result<DeepLinkName, TypeConstraintError> {
        DeepLinkName::new(self.name.clone())
    }
}
