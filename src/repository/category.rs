use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::CategorySlug;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::position.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_slug(&self, slug: &CategorySlug) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .filter(categories::slug.eq(slug.as_str()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let row: DbCategory = diesel::insert_into(categories::table)
            .values(&db_category)
            .get_result(&mut conn)?;

        Ok(row.try_into()?)
    }

    fn upsert_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let row: DbCategory = diesel::insert_into(categories::table)
            .values(&db_category)
            .on_conflict(categories::slug)
            .do_update()
            .set((
                categories::name.eq(&db_category.name),
                categories::description.eq(&db_category.description),
                categories::image.eq(&db_category.image),
                categories::position.eq(db_category.position),
                categories::updated_at.eq(diesel::dsl::now),
            ))
            .get_result(&mut conn)?;

        Ok(row.try_into()?)
    }
}
