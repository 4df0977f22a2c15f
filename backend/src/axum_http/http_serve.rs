use crate::{
    axum_http::{default_routers, routers},
    config::config_model::DotEnvyConfig,
};
use anyhow::Result;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use crates::infra::node_api::client::NodeApiClient;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub async fn start(config: Arc<DotEnvyConfig>, node_api: Arc<NodeApiClient>) -> Result<()> {
    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest("/api/v1/plans", routers::plans::routes(Arc::clone(&node_api)))
        .nest(
            "/api/v1/admin/plans",
            routers::admin_plans::routes(Arc::clone(&node_api)),
        )
        .nest(
            "/api/v1/admin/tickets",
            routers::tickets::admin_routes(Arc::clone(&node_api)),
        )
        .nest(
            "/api/v1/billing-history",
            routers::billing_history::routes(Arc::clone(&node_api)),
        )
        .nest(
            "/api/v1/tickets",
            routers::tickets::routes(Arc::clone(&node_api)),
        )
        .nest(
            "/api/v1/payment-methods",
            routers::payment_methods::routes(Arc::clone(&node_api)),
        )
        .nest(
            "/api/v1/subscriptions",
            routers::subscriptions::routes(Arc::clone(&node_api)),
        )
        .route("/api/v1/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.portal_server.timeout,
        )))
        .layer(RequestBodyLimitLayer::new(
            (config.portal_server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any), // TODO Restrict to the portal domain later
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.portal_server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.portal_server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
