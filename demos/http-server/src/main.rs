use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vigil_core::{CheckRegistry, CheckResult};
use vigil_model::HealthStatus;
use vigil_prometheus::{Encoder, InstrumentationBuilder, Registry, TextEncoder};

#[derive(Clone)]
struct AppState {
    registry: Arc<Registry>,
    checks: Arc<CheckRegistry>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1) Logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!("logger initialized");

    // 2) Health checks
    let mut checks = CheckRegistry::new();
    checks.register_fn("self", || async { CheckResult::healthy() })?;
    checks.register_fn("random", || async {
        let jitter = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos();
        tokio::time::sleep(Duration::from_millis(100 + u64::from(jitter % 400))).await;
        match jitter % 3 {
            0 => CheckResult::unhealthy("simulated outage"),
            1 => CheckResult::degraded("simulated slowdown"),
            _ => CheckResult::healthy(),
        }
    })?;
    let checks = Arc::new(checks);
    info!("registered {} health checks", checks.len());

    // 3) Gauges
    let registry = Arc::new(Registry::new());
    InstrumentationBuilder::new()
        .with_source(Arc::clone(&checks) as Arc<dyn vigil_core::HealthSource>)
        .configure(|options| {
            options.status_gauge_name = "myapp_health".to_string();
            options.duration_gauge_name = "myapp_health_duration_seconds".to_string();
        })
        .register(&registry)?;
    info!("health gauges registered");

    // 4) HTTP server
    let state = AppState { registry, checks };
    let app = Router::new()
        .route("/metrics", get(metrics))
        .route("/healthz", get(healthz))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    info!("listening on 0.0.0.0:8080");
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /metrics
async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let families = state.registry.gather();
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&families, &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
    }

    (
        [(header::CONTENT_TYPE, encoder.format_type().to_string())],
        buffer,
    )
        .into_response()
}

/// GET /healthz
async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.checks.run_all().await;
    let code = match report.worst_status() {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(report))
}
