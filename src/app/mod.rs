//! 应用层

pub mod employee;

use axum::{middleware, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
use employee::handler::{routes, AppState};

/// 组装路由与中间件
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
