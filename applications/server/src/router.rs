/// HTTP router
use crate::{api, middleware, state::AppState};
use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router around an already constructed state
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route(
            "/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .delete(api::users::delete_user),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.mode,
            middleware::redact_internal_errors,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
