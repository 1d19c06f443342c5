use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, DeepLinkId, DeepLinkName, DeepLinkSlug};

/// A named, orderable navigation shortcut, optionally scoped to a category.
/// Used for external/QR-driven entry points into the storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLink {
    pub id: DeepLinkId,
    pub slug: DeepLinkSlug,
    pub name: DeepLinkName,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub position: i32,
    pub is_active: bool,
}

/// Data required to insert or upsert a [`DeepLink`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDeepLink {
    pub slug: DeepLinkSlug,
    pub name: DeepLinkName,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub position: i32,
    pub is_active: bool,
}
