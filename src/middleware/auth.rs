use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use mongodb::{bson::doc, Collection};

use crate::errors::{AppError, Result};
use crate::models::user::User;
use crate::state::AppState;

/// Bearer-token gate for every protected route. Verifies the signature
/// and expiry, then requires the token's subject to still resolve to a
/// live user record. The user document rides along in request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(AppError::InvalidToken)?
        .to_owned();

    let claims = state.token_service.verify_token(&token)?;

    let users: Collection<User> = state.db.collection("users");
    let user = users
        .find_one(doc! { "id": &claims.sub })
        .await?
        .ok_or(AppError::InvalidToken)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
