use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::product::{NewProduct, NewProductImage, NewProductVideo, Product, ProductFields};
use crate::domain::types::{ProductId, ProductSlug};
use crate::models::category::Category as DbCategory;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChanges,
};
use crate::models::product_image::{
    NewProductImage as DbNewProductImage, ProductImage as DbProductImage,
};
use crate::models::product_video::{
    NewProductVideo as DbNewProductVideo, ProductVideo as DbProductVideo,
};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter, RepositoryError,
    RepositoryResult,
};

/// Expands product/category rows with their position-ordered media and
/// converts everything into domain entities.
fn attach_media(
    conn: &mut DbConnection,
    rows: Vec<(DbProduct, DbCategory)>,
) -> RepositoryResult<Vec<Product>> {
    use crate::schema::{product_images, product_videos};

    let db_products: Vec<DbProduct> = rows.iter().map(|(product, _)| product.clone()).collect();

    let images = DbProductImage::belonging_to(&db_products)
        .order(product_images::position.asc())
        .load::<DbProductImage>(conn)?
        .grouped_by(&db_products);

    let videos = DbProductVideo::belonging_to(&db_products)
        .order(product_videos::position.asc())
        .load::<DbProductVideo>(conn)?
        .grouped_by(&db_products);

    rows.into_iter()
        .zip(images)
        .zip(videos)
        .map(|(((product, category), images), videos)| {
            let category = category.try_into()?;
            let images = images
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<_>, _>>()?;
            let videos = videos
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(product.into_domain(category, images, videos)?)
        })
        .collect()
}

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let mut items = products::table
            .inner_join(categories::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(slug) = &query.category {
            items = items.filter(categories::slug.eq(slug.as_str().to_string()));
        }

        if let Some(featured) = query.featured {
            items = items.filter(products::featured.eq(featured));
        }

        if let Some(search) = &query.search {
            // SQLite's LIKE is case-insensitive for ASCII, which matches the
            // endpoint contract for free-text search.
            let pattern = format!("%{search}%");
            items = items.filter(
                products::name
                    .like(pattern.clone())
                    .or(products::description.like(pattern.clone()))
                    .or(products::ai_description.like(pattern)),
            );
        }

        let rows = items
            .order(products::created_at.desc())
            .load::<(DbProduct, DbCategory)>(&mut conn)?;

        attach_media(&mut conn, rows)
    }

    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let row = products::table
            .inner_join(categories::table)
            .filter(products::slug.eq(slug.as_str()))
            .first::<(DbProduct, DbCategory)>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(attach_media(&mut conn, vec![row])?.into_iter().next())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::{product_images, product_videos, products};

        let mut conn = self.conn()?;
        let db_product = DbNewProduct::from_fields(&product.slug, &product.fields)?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let row: DbProduct = diesel::insert_into(products::table)
                .values(&db_product)
                .get_result(conn)?;
            let product_id = ProductId::new(row.id)?;

            if !product.images.is_empty() {
                let rows: Vec<DbNewProductImage> = product
                    .images
                    .iter()
                    .map(|image| DbNewProductImage::for_product(product_id, image))
                    .collect();
                diesel::insert_into(product_images::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            if !product.videos.is_empty() {
                let rows: Vec<DbNewProductVideo> = product
                    .videos
                    .iter()
                    .map(|video| DbNewProductVideo::for_product(product_id, video))
                    .collect();
                diesel::insert_into(product_videos::table)
                    .values(&rows)
                    .execute(conn)?;
            }

            Ok(())
        })?;

        self.get_product_by_slug(&product.slug)?
            .ok_or(RepositoryError::NotFound)
    }

    fn update_product(&self, id: ProductId, fields: &ProductFields) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes = ProductChanges::from_fields(fields)?;

        let affected = diesel::update(products::table.find(id.get()))
            .set((changes, products::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn replace_product_images(
        &self,
        id: ProductId,
        images: &[NewProductImage],
    ) -> RepositoryResult<usize> {
        use crate::schema::product_images;

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(product_images::table.filter(product_images::product_id.eq(id.get())))
                .execute(conn)?;

            if images.is_empty() {
                return Ok(0);
            }

            let rows: Vec<DbNewProductImage> = images
                .iter()
                .map(|image| DbNewProductImage::for_product(id, image))
                .collect();
            Ok(diesel::insert_into(product_images::table)
                .values(&rows)
                .execute(conn)?)
        })?;

        Ok(affected)
    }

    fn replace_product_videos(
        &self,
        id: ProductId,
        videos: &[NewProductVideo],
    ) -> RepositoryResult<usize> {
        use crate::schema::product_videos;

        let mut conn = self.conn()?;

        let affected = conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(product_videos::table.filter(product_videos::product_id.eq(id.get())))
                .execute(conn)?;

            if videos.is_empty() {
                return Ok(0);
            }

            let rows: Vec<DbNewProductVideo> = videos
                .iter()
                .map(|video| DbNewProductVideo::for_product(id, video))
                .collect();
            Ok(diesel::insert_into(product_videos::table)
                .values(&rows)
                .execute(conn)?)
        })?;

        Ok(affected)
    }
}
