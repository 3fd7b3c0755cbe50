use super::INSERT_CHUNK;
use crate::Db;
use catalog_core::{
    models::{Review, ReviewDraft},
    ports::ReviewRepository,
};
use sqlx::types::Json;

impl ReviewRepository for Db {
    async fn list_reviews(&self) -> Result<Vec<Review>, Self::Error> {
        let reviews = sqlx::query_scalar::<_, Json<Review>>(
            r#"
            select
                data
            from
                review
            order by
                rowid
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(reviews.into_iter().map(|Json(review)| review).collect())
    }

    async fn query_reviews_by_dealership(
        &self,
        dealership: &str,
    ) -> Result<Vec<Review>, Self::Error> {
        // the comparison happens on the textual form of the stored value, so
        // the path segment is never coerced into a number
        let reviews = sqlx::query_scalar::<_, Json<Review>>(
            r#"
            select
                data
            from
                review
            where
                cast(dealership as text) = $1
            order by
                rowid
            "#,
        )
        .bind(dealership)
        .fetch_all(&self.reader)
        .await?;

        Ok(reviews.into_iter().map(|Json(review)| review).collect())
    }

    async fn create_review(&self, draft: ReviewDraft) -> Result<Review, Self::Error> {
        // Reading the current maximum and inserting happen in one statement on
        // the single writer connection, so no other insert can claim the same
        // id in between.
        let dealership = draft.dealership;
        let data = Json(draft);
        let Json(review) = sqlx::query_scalar::<_, Json<Review>>(
            r#"
            insert into
                review (id, dealership, data)
            select
                next_id, $1, json_set($2, '$.id', next_id)
            from
                (select coalesce(max(id), 0) + 1 as next_id from review)
            returning
                data
            "#,
        )
        .bind(dealership)
        .bind(data)
        .fetch_one(&self.writer)
        .await?;

        Ok(review)
    }

    async fn insert_reviews(&self, reviews: Vec<Review>) -> Result<usize, Self::Error> {
        let mut inserted = 0;

        for chunk in reviews.chunks(INSERT_CHUNK) {
            let mut query_builder =
                sqlx::QueryBuilder::new("insert into review (id, dealership, data) ");
            query_builder.push_values(chunk, |mut b, review| {
                b.push_bind(review.id)
                    .push_bind(review.data.dealership)
                    .push_bind(Json(review));
            });

            let result = query_builder.build().execute(&self.writer).await?;
            inserted += result.rows_affected() as usize;
        }

        Ok(inserted)
    }

    async fn delete_reviews(&self) -> Result<usize, Self::Error> {
        let result = sqlx::query("delete from review")
            .execute(&self.writer)
            .await?;

        Ok(result.rows_affected() as usize)
    }
}
