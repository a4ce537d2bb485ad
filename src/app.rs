use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::docs;
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;

/// Versioned prefix every route is registered under.
pub const API_BASE_PATH: &str = "/api/v1";

/// Process-wide state handed to every handler. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseManager,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseManager) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}

/// Build the full router: public and protected routes under the versioned
/// prefix, swagger UI, and the global logging/recovery/CORS layers.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .with_state(state);

    Router::new()
        .nest(API_BASE_PATH, api)
        .merge(docs::swagger_ui())
        // Global middleware, outermost last
        .layer(cors_layer())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn public_routes() -> Router<AppState> {
    Router::new().route("/login", post(public::login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(protected::health))
        .route("/users", get(protected::user_list).post(protected::user_create))
        .route(
            "/users/:id",
            get(protected::user_show)
                .put(protected::user_update)
                .delete(protected::user_delete),
        )
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
}
