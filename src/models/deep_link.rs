use diesel::prelude::*;

use crate::domain::deep_link::{DeepLink as DomainDeepLink, NewDeepLink as DomainNewDeepLink};
use crate::domain::types::{DeepLinkName, DeepLinkSlug, TypeConstraintError};

/// Diesel model representing the `deep_links` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::deep_links)]
pub struct DeepLink {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    pub position: i32,
    pub is_active: bool,
}

/// Insertable/patchable form of [`DeepLink`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::deep_links)]
#[diesel(treat_none_as_null = true)]
pub struct NewDeepLink {
    pub slug: String,
    pub name: String,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    pub position: i32,
    pub is_active: bool,
}

impl TryFrom<DeepLink> for DomainDeepLink {
    type Error = TypeConstraintError;

    fn try_from(link: DeepLink) -> Result<Self, Self::Error> {
        Ok(Self {
            id: link.id.try_into()?,
            slug: DeepLinkSlug::new(link.slug)?,
            name: DeepLinkName::new(link.name)?,
            category_id: link.category_id.map(TryInto::try_into).transpose()?,
            description: link.description,
            position: link.position,
            is_active: link.is_active,
        })
    }
}

impl From<DomainNewDeepLink> for NewDeepLink {
    fn from(link: DomainNewDeepLink) -> Self {
        Self {
            slug: link.slug.into_inner(),
            name: link.name.into_inner(),
            category_id: link.category_id.map(|id| id.get()),
            description: link.description,
            position: link.position,
            is_active: link.is_active,
        }
    }
}
