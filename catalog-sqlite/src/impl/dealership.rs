use super::INSERT_CHUNK;
use crate::Db;
use catalog_core::{models::Dealership, ports::DealershipRepository};
use sqlx::types::Json;

impl DealershipRepository for Db {
    async fn list_dealerships(&self) -> Result<Vec<Dealership>, Self::Error> {
        let dealerships = sqlx::query_scalar::<_, Json<Dealership>>(
            r#"
            select
                data
            from
                dealership
            order by
                rowid
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(dealerships.into_iter().map(|Json(dealer)| dealer).collect())
    }

    async fn query_dealerships_by_state(
        &self,
        state: &str,
    ) -> Result<Vec<Dealership>, Self::Error> {
        let dealerships = sqlx::query_scalar::<_, Json<Dealership>>(
            r#"
            select
                data
            from
                dealership
            where
                state = $1
            order by
                rowid
            "#,
        )
        .bind(state)
        .fetch_all(&self.reader)
        .await?;

        Ok(dealerships.into_iter().map(|Json(dealer)| dealer).collect())
    }

    async fn get_dealership(&self, dealership_id: i64) -> Result<Option<Dealership>, Self::Error> {
        let dealership = sqlx::query_scalar::<_, Json<Dealership>>(
            r#"
            select
                data
            from
                dealership
            where
                id = $1
            order by
                rowid
            limit 1
            "#,
        )
        .bind(dealership_id)
        .fetch_optional(&self.reader)
        .await?
        .map(|Json(dealer)| dealer);

        Ok(dealership)
    }

    async fn insert_dealerships(&self, dealerships: Vec<Dealership>) -> Result<usize, Self::Error> {
        let mut inserted = 0;

        for chunk in dealerships.chunks(INSERT_CHUNK) {
            let mut query_builder =
                sqlx::QueryBuilder::new("insert into dealership (id, state, data) ");
            query_builder.push_values(chunk, |mut b, dealer| {
                b.push_bind(dealer.id)
                    .push_bind(dealer.state.as_str())
                    .push_bind(Json(dealer));
            });

            let result = query_builder.build().execute(&self.writer).await?;
            inserted += result.rows_affected() as usize;
        }

        Ok(inserted)
    }

    async fn delete_dealerships(&self) -> Result<usize, Self::Error> {
        let result = sqlx::query("delete from dealership")
            .execute(&self.writer)
            .await?;

        Ok(result.rows_affected() as usize)
    }
}
