//! HTTP API
//!
//! JSON endpoints used by the operator front end. Field names follow the
//! front end (Spanish); every failure answers with the shared error body.

pub mod consumptions;
pub mod extract;
pub mod health;
pub mod products;
pub mod rates;
pub mod reports;
pub mod tables;
pub mod tickets;

use axum::{Json, Router};
use http::{HeaderValue, Method};
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::services::DEFAULT_BRANCH_ID;
use crate::state::AppState;

/// Handler result type
pub type ApiResult<T> = Result<Json<T>, ServiceError>;

/// `?sucursal_id=` query, defaulting to branch 1
#[derive(Debug, Default, Deserialize)]
pub struct BranchQuery {
    pub sucursal_id: Option<i64>,
}

impl BranchQuery {
    pub fn branch_id(&self) -> i64 {
        self.sucursal_id.unwrap_or(DEFAULT_BRANCH_ID)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(rates::router())
        .merge(tables::router())
        .merge(products::router())
        .merge(consumptions::router())
        .merge(tickets::router())
        .merge(reports::router())
}

/// Build the full application: routes, static front end, CORS and tracing
pub fn build_app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir);

    build_router()
        .fallback_service(static_files)
        // CORS - Handle cross-origin requests
        .layer(cors_layer(&state.config.allow_origin))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS from `ALLOW_ORIGIN`: `*` or a comma-separated origin list
pub fn cors_layer(allow_origin: &str) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if allow_origin.trim() == "*" {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allow_origin
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
