use diesel::prelude::*;

use crate::domain::product::{
    NewProductVideo as DomainNewProductVideo, ProductVideo as DomainProductVideo,
};
use crate::domain::types::{ImageUrl, ProductId, TypeConstraintError, VideoUrl};
use crate::models::product::Product;

/// Diesel model representing the `product_videos` table.
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Product))]
#[diesel(table_name = crate::schema::product_videos)]
pub struct ProductVideo {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub thumbnail: Option<String>,
    pub position: i32,
}

/// Insertable form of [`ProductVideo`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_videos)]
pub struct NewProductVideo {
    pub product_id: i32,
    pub url: String,
    pub thumbnail: Option<String>,
    pub position: i32,
}

impl TryFrom<ProductVideo> for DomainProductVideo {
    type Error = TypeConstraintError;

    fn try_from(video: ProductVideo) -> Result<Self, Self::Error> {
        Ok(Self {
            id: video.id,
            product_id: video.product_id.try_into()?,
            url: VideoUrl::new(video.url)?,
            thumbnail: video.thumbnail.map(ImageUrl::new).transpose()?,
            position: video.position,
        })
    }
}

impl NewProductVideo {
    /// Binds an ownerless video payload to its product.
    pub fn for_product(product_id: ProductId, video: &DomainNewProductVideo) -> Self {
        Self {
            product_id: product_id.get(),
            url: video.url.as_str().to_string(),
            thumbnail: video.thumbnail.as_ref().map(|url| url.as_str().to_string()),
            position: video.position,
        }
    }
}
