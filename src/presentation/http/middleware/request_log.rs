// src/presentation/http/middleware/request_log.rs
use axum::{
    body::Body,
    extract::{ConnectInfo, MatchedPath},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};
use tracing::{info, warn};

fn client_ip(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        })
}

/// One structured line per request, at `warn` for server errors.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let query = req.uri().query().unwrap_or_default().to_string();
    let ip = client_ip(&req).unwrap_or_default();
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(
            %method,
            path = %path,
            query = %query,
            status,
            latency_ms,
            ip = %ip,
            user_agent = %user_agent,
            "request"
        );
    } else {
        info!(
            %method,
            path = %path,
            query = %query,
            status,
            latency_ms,
            ip = %ip,
            user_agent = %user_agent,
            "request"
        );
    }

    response
}
