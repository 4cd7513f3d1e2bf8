//! Route definitions for the REST front-end.

use crate::gate;
use crate::handlers;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the full router: public register/login plus the gated `/users`
/// surface.
pub fn router(state: AppState) -> Router {
    let users = Router::new()
        .route("/users", get(handlers::list_users))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            gate::require_identity,
        ));

    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .merge(users)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
