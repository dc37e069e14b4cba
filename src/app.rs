//! Router assembly.

use axum::{Router, routing::get};

use crate::{
    handlers,
    middleware::{self, auth::ApiToken},
    store::SharedStore,
};

/// Build the full application router around an explicitly constructed store.
///
/// Every API route sits behind the middleware chain. The documentation route
/// is added after the chain is applied, so it is served without credentials
/// and without access logging.
pub fn build_router(store: SharedStore, token: ApiToken) -> Router {
    let api = Router::new()
        .route("/", get(handlers::root::root))
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        );

    middleware::apply(api, token)
        .route(handlers::docs::DOCS_PATH, get(handlers::docs::openapi))
        .with_state(store)
}
