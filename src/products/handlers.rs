use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware,
    routing::{get, patch},
    Json, Router,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{
    dto::{
        CreateProductRequest, CreatedProductResponse, PatchProductRequest, ProductCount,
    },
    repo_types::{NewProduct, Product, ProductPatch},
};
use crate::{
    auth::middleware::{require_auth, AuthUser},
    error::ApiError,
    state::AppState,
};

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .route_layer(middleware::from_fn_with_state(state, require_auth))
                .post(create_product),
        )
        .route("/products/:id", patch(update_product))
        .route("/products/count/:price", get(count_priced_above))
}

#[instrument(skip(state, user))]
pub async fn list_products(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list().await?;
    debug!(user = %user.0.user, count = products.len(), "listed products");
    Ok(Json(products))
}

#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedProductResponse>), ApiError> {
    let Json(payload) = payload?;
    let new_product = NewProduct::try_from(payload)?;
    let product = state.products.insert(new_product).await?;
    info!(product_id = %product.id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedProductResponse {
            message: "Product created successfully",
            product,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<PatchProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let patch = ProductPatch::try_from(payload)?;
    let product = state
        .products
        .update(id, patch)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;
    info!(product_id = %product.id, "product updated");
    Ok(Json(product))
}

#[instrument(skip(state))]
pub async fn count_priced_above(
    State(state): State<AppState>,
    price: Result<Path<f64>, PathRejection>,
) -> Result<Json<ProductCount>, ApiError> {
    let Path(price) = price?;
    if !price.is_finite() {
        return Err(ApiError::Validation("price must be a number".into()));
    }
    let product_count = state.products.count_priced_above(price).await?;
    Ok(Json(ProductCount { product_count }))
}
