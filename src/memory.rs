//! In-memory stores used by the router tests.

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    auth::{
        repo::UserStore,
        repo_types::{NewUser, User},
    },
    db::StoreError,
    products::{
        repo::ProductStore,
        repo_types::{NewProduct, Product, ProductPatch},
    },
};

#[derive(Default)]
pub struct InMemoryUsers {
    users: RwLock<Vec<User>>,
}

impl InMemoryUsers {
    pub async fn all(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUsers {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate("Email already registered".into()));
        }
        let stored = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

/// Every call fails as if the connection pool were exhausted.
pub struct UnavailableUsers;

#[async_trait]
impl UserStore for UnavailableUsers {
    async fn insert(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    products: RwLock<Vec<Product>>,
}

#[async_trait]
impl ProductStore for InMemoryProducts {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.read().await.clone())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, StoreError> {
        let stored = Product {
            id: Uuid::new_v4(),
            name: product.name,
            price: product.price,
            description: product.description,
            url: product.url,
            rating: product.rating,
            created_at: OffsetDateTime::now_utc(),
        };
        self.products.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        let Some(p) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            p.name = name;
        }
        if let Some(price) = patch.price {
            p.price = price;
        }
        if patch.description.is_some() {
            p.description = patch.description;
        }
        if patch.url.is_some() {
            p.url = patch.url;
        }
        if patch.rating.is_some() {
            p.rating = patch.rating;
        }
        Ok(Some(p.clone()))
    }

    async fn count_priced_above(&self, price: f64) -> Result<i64, StoreError> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| p.price > price).count() as i64)
    }
}
