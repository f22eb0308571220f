use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Investment {
    pub id: i64,
    pub farmer_name: String,
    pub amount: f64,
    pub crop: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Investment {
    pub async fn list_all(db: &PgPool) -> Result<Vec<Investment>, sqlx::Error> {
        sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, farmer_name, amount, crop, created_at
            FROM investments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Investment>, sqlx::Error> {
        sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, farmer_name, amount, crop, created_at
            FROM investments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        farmer_name: &str,
        amount: f64,
        crop: &str,
    ) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO investments (farmer_name, amount, crop)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(farmer_name)
        .bind(amount)
        .bind(crop)
        .fetch_one(db)
        .await?;
        Ok(id)
    }

    /// Seed path only: inserts with an explicit historical timestamp instead
    /// of letting the database assign one.
    pub async fn create_at(
        db: &PgPool,
        farmer_name: &str,
        amount: f64,
        crop: &str,
        created_at: OffsetDateTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO investments (farmer_name, amount, crop, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(farmer_name)
        .bind(amount)
        .bind(crop)
        .bind(created_at)
        .execute(db)
        .await?;
        Ok(())
    }
}
