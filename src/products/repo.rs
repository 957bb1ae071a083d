use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{NewProduct, Product, ProductPatch};
use crate::db::StoreError;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError>;
    /// `Ok(None)` when no product has this id.
    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError>;
    /// Number of products whose price is strictly greater than `price`.
    async fn count_priced_above(&self, price: f64) -> Result<i64, StoreError>;
}

#[derive(Clone)]
pub struct PgProductStore {
    db: PgPool,
}

impl PgProductStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, description, url, rating, created_at
            FROM products
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (id, name, price, description, url, rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, price, description, url, rating, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.url)
        .bind(product.rating)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name        = COALESCE($2, name),
                price       = COALESCE($3, price),
                description = COALESCE($4, description),
                url         = COALESCE($5, url),
                rating      = COALESCE($6, rating)
            WHERE id = $1
            RETURNING id, name, price, description, url, rating, created_at
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.price)
        .bind(patch.description)
        .bind(patch.url)
        .bind(patch.rating)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn count_priced_above(&self, price: f64) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE price > $1")
            .bind(price)
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}
