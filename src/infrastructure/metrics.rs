// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram, Unit};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// 安装 Prometheus 记录器
///
/// 不启动 HTTP 监听，运行结束时通过返回的句柄把快照写入文件
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    info!("Metrics recorder installed");
    Ok(handle)
}

/// 注册指标说明
pub fn describe_metrics() {
    describe_counter!("dns_queries_total", "Total number of AAAA queries sent to resolvers");
    describe_counter!(
        "dns_query_transport_errors_total",
        "Total number of AAAA query attempts that failed in transport"
    );
    describe_counter!(
        "dns_query_rejections_total",
        "Total number of answers with an unsuccessful response code"
    );
    describe_counter!(
        "dns_query_give_ups_total",
        "Total number of endpoints given up on after exhausting all attempts"
    );
    describe_counter!(
        "dns_queries_cancelled_total",
        "Total number of queries skipped or abandoned because of shutdown"
    );
    describe_counter!("websites_checked_total", "Total number of websites checked, by support status");
    describe_histogram!(
        "website_check_duration_seconds",
        Unit::Seconds,
        "Wall-clock duration of checking one website"
    );
}
