// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use ipv6_watch::cli::Cli;
use ipv6_watch::config::catalog::SiteCatalog;
use ipv6_watch::config::settings::Settings;
use ipv6_watch::domain::services::category_service::CategoryService;
use ipv6_watch::engines::query_executor::QueryExecutor;
use ipv6_watch::engines::udp_transport::UdpTransport;
use ipv6_watch::infrastructure::metrics::init_metrics;
use ipv6_watch::presentation::report::ReportWriter;
use ipv6_watch::presentation::social::render_twitter_handles;
use ipv6_watch::utils::telemetry;
use ipv6_watch::workers::domain_scanner::DomainScanner;
use ipv6_watch::workers::manager::{spawn_shutdown_listener, WorkerManager};
use std::sync::Arc;
use tracing::{info, warn};

/// 主函数
///
/// 加载配置和站点目录，检查所有网站并写出报告
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let settings = Settings::load(&cli.overrides()).context("failed to load settings")?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging.level);
    info!("Starting ipv6-watch...");

    // 3. Load site catalog
    let catalog = SiteCatalog::load(&settings.catalog_path())?;
    let websites = catalog.websites()?;

    if cli.twitter {
        print!("{}", render_twitter_handles(&websites));
        return Ok(());
    }

    let time_zone = settings.output.time_zone()?;
    let metrics_handle = init_metrics().context("failed to install metrics recorder")?;

    let registry = Arc::new(catalog.resolver_registry());
    if registry.is_empty() {
        warn!("No resolvers configured, every website will be reported without IPv6 support");
    }
    info!(
        providers = registry.providers().len(),
        endpoints = registry.endpoint_count(),
        websites = websites.len(),
        "Site catalog loaded"
    );

    // 4. Build the resolution engine
    let scanner_settings = &settings.scanner;
    let transport = UdpTransport::new(scanner_settings.query_timeout());
    let executor = Arc::new(
        QueryExecutor::new(transport, scanner_settings.retry_policy()).with_port(scanner_settings.dns_port),
    );
    let scanner = DomainScanner::new(executor, registry)
        .with_category_filter(scanner_settings.category_filter())
        .with_shutdown(spawn_shutdown_listener());

    // 5. Check every website
    let manager = WorkerManager::new(scanner, scanner_settings.worker_count, scanner_settings.queue_factor);
    let websites = manager.check_all(websites).await?;

    // 6. Group into categories and write the report
    let categories = CategoryService::organize(catalog.categories(), &websites);

    let writer = ReportWriter::new(settings.dist_dir(), settings.output.minify, time_zone);
    writer.write_report(&catalog.page_meta(), &categories, &websites, Utc::now())?;
    writer.write_metrics(&metrics_handle.render())?;

    info!("Finished");
    Ok(())
}
