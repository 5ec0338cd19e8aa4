//! 路由配置模块

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use scholarship_shared::{config::ServerConfig, observability::middleware as obs_middleware};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::{handlers, state::AppState};

/// 业务 API 路由（挂载于 /api/v1）
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/evaluations", post(handlers::evaluation::evaluate))
        .route("/rules", get(handlers::rule::list_rules))
}

/// 根据配置构建 CORS 层
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origin_list();

    if origins.iter().any(|o| o == "*") {
        info!("CORS allowed_origins: * (all origins)");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("忽略无效的 CORS 来源: {}", origin);
                None
            }
        })
        .collect();

    info!("CORS allowed_origins: {}", server.cors_origins);
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// 构建完整应用路由
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        .route("/health", get(health_check))
        .layer(cors_layer(server))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
