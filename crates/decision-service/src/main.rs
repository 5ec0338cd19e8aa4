//! 奖学金决策服务
//!
//! 提供奖学金资格评估 REST API。

use anyhow::Result;
use rule_engine::{RuleExecutor, RuleStore, ScholarshipEngine};
use scholarship_decision_service::{routes, state::AppState};
use scholarship_shared::{config::AppConfig, observability};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

const SERVICE_NAME: &str = "scholarship-decision-service";

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load(SERVICE_NAME).unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        AppConfig {
            service_name: SERVICE_NAME.to_string(),
            ..Default::default()
        }
    });

    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    let _guard = observability::init(&obs_config).await?;

    info!(
        environment = %config.environment,
        "Starting {} on {}",
        config.service_name,
        config.server_addr()
    );

    // 规则表在进程生命周期内只构建一次
    let store = RuleStore::scholarship()?;
    let stats = store.stats();
    info!(
        rules = stats.rules_count,
        avg_fields = stats.avg_fields_per_rule,
        "Rule store initialized"
    );

    let mut executor = RuleExecutor::new();
    if config.engine.trace_conditions {
        executor = executor.with_trace();
        info!("Condition tracing enabled");
    }
    let engine = ScholarshipEngine::new(store).with_executor(executor);

    let app = routes::build_router(AppState::new(engine), &config.server);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// 优雅关闭信号处理
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        }
    }
}
