use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use super::{claims::Claims, jwt::JwtKeys};
use crate::error::ApiError;

/// Pulls the token out of `Authorization: Bearer <token>`. Any other scheme,
/// or a bare `Bearer`, counts as no token.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    parts.next()
}

/// Rejects the request unless it carries a valid token; on success the
/// decoded [`Claims`] are stored in the request extensions.
pub async fn require_auth(
    State(keys): State<JwtKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = {
        let token = bearer_token(req.headers()).ok_or(ApiError::MissingToken)?;
        keys.verify(token)?
    };
    debug!(user = %claims.user, "request authorized");
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Claims of the caller, available behind [`require_auth`].
pub struct AuthUser(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or(ApiError::MissingToken)
    }
}
