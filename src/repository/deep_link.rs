use diesel::prelude::*;

use crate::domain::deep_link::{DeepLink, NewDeepLink};
use crate::models::deep_link::{DeepLink as DbDeepLink, NewDeepLink as DbNewDeepLink};
use crate::repository::{DeepLinkReader, DeepLinkWriter, DieselRepository, RepositoryResult};

impl DeepLinkReader for DieselRepository {
    fn list_deep_links(&self) -> RepositoryResult<Vec<DeepLink>> {
        use crate::schema::deep_links;

        let mut conn = self.conn()?;

        let items = deep_links::table
            .order(deep_links::position.asc())
            .load::<DbDeepLink>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<DeepLink>, _>>()?;

        Ok(items)
    }
}

impl DeepLinkWriter for DieselRepository {
    fn upsert_deep_link(&self, link: &NewDeepLink) -> RepositoryResult<DeepLink> {
        use crate::schema::deep_links;

        let mut conn = self.conn()?;
        let db_link: DbNewDeepLink = link.clone().into();

        let row: DbDeepLink = diesel::insert_into(deep_links::table)
            .values(&db_link)
            .on_conflict(deep_links::slug)
            .do_update()
            .set((
                deep_links::name.eq(&db_link.name),
                deep_links::category_id.eq(db_link.category_id),
                deep_links::description.eq(&db_link.description),
                deep_links::position.eq(db_link.position),
                deep_links::is_active.eq(db_link.is_active),
            ))
            .get_result(&mut conn)?;

        Ok(row.try_into()?)
    }
}
