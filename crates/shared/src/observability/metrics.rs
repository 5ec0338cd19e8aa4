//! Prometheus 指标模块
//!
//! 安装全局 recorder，并在独立端口上提供 `/metrics` 供 Prometheus 抓取。
//! HTTP 指标按路由模板打标签，避免路径参数撑大标签基数。

use anyhow::Result;
use axum::{Router, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};
use tracing::{error, info};

use super::ObservabilityConfig;

/// 请求未命中任何路由时使用的标签值
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// 后台运行的指标服务器，drop 时停止
pub struct MetricsServer {
    task: JoinHandle<()>,
}

impl Drop for MetricsServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// 安装 recorder 并启动指标服务器
pub async fn init(config: &ObservabilityConfig) -> Result<MetricsServer> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    metrics::counter!("service_starts_total", "service" => config.service_name.clone()).increment(1);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.metrics_port));
    let listener = TcpListener::bind(addr).await?;
    info!("Metrics server listening on {}", addr);

    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, exporter_routes(handle)).await {
            error!("Metrics server error: {}", e);
        }
    });

    Ok(MetricsServer { task })
}

fn exporter_routes(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(move || std::future::ready(handle.render())))
        .route("/health", get(|| async { "OK" }))
}

/// 指标描述，出现在 /metrics 的 HELP 注释中
fn describe_metrics() {
    metrics::describe_counter!("http_requests_total", "Total number of HTTP requests");
    metrics::describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    metrics::describe_counter!(
        "scholarship_evaluations_total",
        "Total number of scholarship evaluations by decision"
    );
    metrics::describe_histogram!(
        "scholarship_evaluation_duration_seconds",
        "Scholarship evaluation duration in seconds"
    );
}

/// 记录 HTTP 请求
///
/// `route` 是路由模板（如 `/api/v1/evaluations`），不是原始路径。
pub fn record_http_request(method: &str, route: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    metrics::counter!("http_requests_total", &labels).increment(1);
    metrics::histogram!("http_request_duration_seconds", &labels).record(duration_secs);
}

/// 记录奖学金评估
///
/// `decision` 为结论字符串（如 AWARD_FULL、NO_MATCH），失败时为 ERROR。
pub fn record_scholarship_evaluation(decision: &str, duration_secs: f64) {
    metrics::counter!(
        "scholarship_evaluations_total",
        "decision" => decision.to_string()
    )
    .increment(1);

    metrics::histogram!("scholarship_evaluation_duration_seconds").record(duration_secs);
}
