use crate::auth::{self, AuthContext};
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Authenticate the request and stash the principal in request extensions.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let user_id = match auth::extract_bearer_token(request.headers())
        .and_then(|token| auth::validate_jwt(token, &state.config.jwt_secret))
    {
        Ok(user_id) => user_id,
        Err(err) => return HttpAppError(err).into_response(),
    };

    request.extensions_mut().insert(AuthContext { user_id });
    next.run(request).await
}
