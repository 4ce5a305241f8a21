use std::sync::Arc;
use axum::{
    Extension, Router,
    extract::Request,
    http::{HeaderValue, Method, header::{ACCEPT, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN}},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use log::warn;
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use crate::{
    AppState,
    config::Config,
    error::{ErrorMessage, HttpError},
    modules::comment::handler::comment_router,
};

async fn not_found(request: Request) -> impl IntoResponse {
    HttpError::not_found(
        ErrorMessage::RouteNotFound(request.method().to_string(), request.uri().path().to_string()).to_string()
    )
}
pub async fn not_allowed() -> impl IntoResponse {
    HttpError::method_not_allowed()
}
/// `CorsLayer` answers every `OPTIONS` request itself, so plain `OPTIONS`
/// requests are routed here before they reach it. Only real preflights carry
/// both `Origin` and `Access-Control-Request-Method`.
async fn plain_options(request: Request, next: Next) -> Response {
    let headers = request.headers();
    let is_preflight = headers.contains_key(ORIGIN) && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD);
    if request.method() != Method::OPTIONS || is_preflight {
        return next.run(request).await;
    }
    if request.uri().path() == "/comments" {
        return not_allowed().await.into_response();
    }
    not_found(request).await.into_response()
}
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);
    match config.frontend_url.as_deref().map(str::parse::<HeaderValue>) {
        Some(Ok(origin)) => cors.allow_origin(origin),
        Some(Err(_)) => {
            warn!("FRONTEND_URL is not a valid origin, allowing any origin");
            cors.allow_origin(Any)
        }
        None => cors.allow_origin(Any),
    }
}
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = cors_layer(&app_state.env);
    Router::new()
        .merge(comment_router())
        .fallback(not_found)
        .method_not_allowed_fallback(not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
        .layer(cors)
        .layer(middleware::from_fn(plain_options))
}
