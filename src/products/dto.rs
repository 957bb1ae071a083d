use serde::{Deserialize, Serialize};

use super::repo_types::{NewProduct, Product, ProductPatch};
use crate::error::ApiError;

fn check_price(price: f64) -> Result<(), ApiError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ApiError::Validation("price must be a non-negative number".into()));
    }
    Ok(())
}

fn check_rating(rating: Option<f64>) -> Result<(), ApiError> {
    match rating {
        Some(r) if !(0.0..=5.0).contains(&r) => {
            Err(ApiError::Validation("rating must be between 0 and 5".into()))
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub rating: Option<f64>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ApiError;

    fn try_from(req: CreateProductRequest) -> Result<Self, Self::Error> {
        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::Validation("name is required".into()));
        }
        let price = req
            .price
            .ok_or_else(|| ApiError::Validation("price is required".into()))?;
        check_price(price)?;
        check_rating(req.rating)?;
        Ok(NewProduct {
            name,
            price,
            description: req.description,
            url: req.url,
            rating: req.rating,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PatchProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub rating: Option<f64>,
}

impl TryFrom<PatchProductRequest> for ProductPatch {
    type Error = ApiError;

    fn try_from(req: PatchProductRequest) -> Result<Self, Self::Error> {
        let name = match req.name {
            Some(n) if n.trim().is_empty() => {
                return Err(ApiError::Validation("name must not be empty".into()))
            }
            Some(n) => Some(n.trim().to_string()),
            None => None,
        };
        if let Some(price) = req.price {
            check_price(price)?;
        }
        check_rating(req.rating)?;
        Ok(ProductPatch {
            name,
            price: req.price,
            description: req.description,
            url: req.url,
            rating: req.rating,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedProductResponse {
    pub message: &'static str,
    pub product: Product,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCount {
    pub product_count: i64,
}
