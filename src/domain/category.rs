use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategorySlug, ImageUrl};

/// A catalog category. The slug is the stable cross-system key; the id is
/// local to one database instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub slug: CategorySlug,
    pub name: CategoryName,
    pub description: Option<String>,
    pub image: Option<ImageUrl>,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert or upsert a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub slug: CategorySlug,
    pub name: CategoryName,
    pub description: Option<String>,
    pub image: Option<ImageUrl>,
    pub position: i32,
}
