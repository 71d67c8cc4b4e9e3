use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionDirectory, UnconfiguredPaymentGateway};
use crate::routes::with_score_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecom_score::config::AppConfig;
use ecom_score::error::AppError;
use ecom_score::report::PlainTextRenderer;
use ecom_score::service::ScoreService;
use ecom_score::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let sessions = Arc::new(InMemorySessionDirectory::default());
    let payments = Arc::new(UnconfiguredPaymentGateway);
    let renderer = Arc::new(PlainTextRenderer::default());
    let score_service = Arc::new(ScoreService::new(
        sessions,
        payments,
        renderer,
        config.report.booking_url.clone(),
    ));

    let app = with_score_routes(score_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "e-commerce health scorer ready");

    axum::serve(listener, app).await?;
    Ok(())
}
