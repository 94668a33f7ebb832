//! Router assembly and shared application state.

use crate::{
    db::DbPool,
    handlers,
    middleware,
    repositories::{
        HealthCheck, HotelStore, PgHealthCheck, PgHotelStore, PgSessionStore, PgTicketStore,
        SessionStore, TicketStore,
    },
};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Store handles shared with every handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<dyn TicketStore>,
    pub hotels: Arc<dyn HotelStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// PostgreSQL-backed stores sharing one pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            tickets: Arc::new(PgTicketStore::new(pool.clone())),
            hotels: Arc::new(PgHotelStore::new(pool.clone())),
            sessions: Arc::new(PgSessionStore::new(pool.clone())),
            health: Arc::new(PgHealthCheck::new(pool)),
        }
    }
}

/// Build the CORS layer.
///
/// `None` allows any origin. Origins that are not valid header values are skipped.
pub fn create_cors_layer(allowed_origins: Option<Vec<String>>) -> CorsLayer {
    let Some(origins) = allowed_origins else {
        tracing::warn!("CORS: no origins configured, allowing any origin");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("CORS: invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}

/// Build the HTTP router.
///
/// `/hotels` routes require a session; `/health` is public.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let authenticated_routes = Router::new()
        .route("/hotels", get(handlers::hotels::list_hotels))
        .route("/hotels/{id}", get(handlers::hotels::get_hotel))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
