use diesel::prelude::*;

use crate::domain::product::{
    NewProductImage as DomainNewProductImage, ProductImage as DomainProductImage,
};
use crate::domain::types::{ImageUrl, ProductId, TypeConstraintError};
use crate::models::product::Product;

/// Diesel model representing the `product_images` table.
#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Product))]
#[diesel(table_name = crate::schema::product_images)]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub url: String,
    pub alt: Option<String>,
    pub position: i32,
    pub is_360: bool,
}

/// Insertable form of [`ProductImage`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage {
    pub product_id: i32,
    pub url: String,
    pub alt: Option<String>,
    pub position: i32,
    pub is_360: bool,
}

impl TryFrom<ProductImage> for DomainProductImage {
    type Error = TypeConstraintError;

    fn try_from(image: ProductImage) -> Result<Self, Self::Error> {
        Ok(Self {
            id: image.id,
            product_id: image.product_id.try_into()?,
            url: ImageUrl::new(image.url)?,
            alt: image.alt,
            position: image.position,
            is_360: image.is_360,
        })
    }
}

impl NewProductImage {
    /// Binds an ownerless image payload to its product.
    pub fn for_product(product_id: ProductId, image: &DomainNewProductImage) -> Self {
        Self {
            product_id: product_id.get(),
            url: image.url.as_str().to_string(),
            alt: image.alt.clone(),
            position: image.position,
            is_360: image.is_360,
        }
    }
}
