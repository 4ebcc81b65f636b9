// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hickory_proto::rr::Name;
use metrics::counter;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error};

use crate::domain::models::resolver::{ResolverEndpoint, ResolverRegistry};
use crate::domain::models::website::{DomainResolverResult, DomainResolverResults, Website};
use crate::engines::query_executor::{normalize_domain, QueryExecutor};
use crate::engines::traits::DnsTransport;

/// 域名扫描器
///
/// 对一个网站的每个域名、每个提供商、每个端点执行查询，
/// 生成完整的结果树。不会因为某个端点已找到记录而提前结束。
pub struct DomainScanner<T: DnsTransport> {
    executor: Arc<QueryExecutor<T>>,
    registry: Arc<ResolverRegistry>,
    category_filter: Option<String>,
    shutdown: Option<watch::Receiver<bool>>,
}

impl<T: DnsTransport> DomainScanner<T> {
    pub fn new(executor: Arc<QueryExecutor<T>>, registry: Arc<ResolverRegistry>) -> Self {
        Self {
            executor,
            registry,
            category_filter: None,
            shutdown: None,
        }
    }

    /// 只查询属于该分类的网站，其余网站的所有端点记为未检查
    pub fn with_category_filter(mut self, category: Option<String>) -> Self {
        self.category_filter = category;
        self
    }

    /// 关闭信号变为 `true` 后，尚未查询的端点记为未检查
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn registry(&self) -> &ResolverRegistry {
        &self.registry
    }

    /// 网站是否被分类过滤排除
    pub fn is_filtered_out(&self, website: &Website) -> bool {
        self.category_filter
            .as_deref()
            .is_some_and(|category| !website.is_in_category(category))
    }

    fn is_cancelled(&self) -> bool {
        self.shutdown.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// 扫描网站的全部域名并写入结果树
    pub async fn scan(&self, website: &mut Website) {
        if self.is_filtered_out(website) {
            debug!(website = %website.name, "Website is not in the selected category, skipping queries");
            self.record_skipped(website);
            return;
        }

        for index in 0..website.domains().len() {
            let raw_domain = website.domains()[index].name.clone();

            let name = match normalize_domain(&raw_domain) {
                Ok(name) => name,
                Err(e) => {
                    error!(domain = %raw_domain, error = %e, "Failed to convert domain to punycode");
                    continue;
                }
            };

            let mut domain_results = Vec::with_capacity(self.registry.providers().len());
            for provider in self.registry.providers() {
                let mut results = Vec::with_capacity(provider.endpoints().len());
                for endpoint in provider.endpoints() {
                    results.push(self.query_or_skip(&name, endpoint).await);
                }

                domain_results.push(DomainResolverResults {
                    provider: provider.id(),
                    results,
                });
            }

            website.record_domain_results(index, domain_results);
        }
    }

    /// 为被过滤的网站写入全部跳过的结果树，不做域名规范化
    fn record_skipped(&self, website: &mut Website) {
        for index in 0..website.domains().len() {
            let domain_results = self
                .registry
                .providers()
                .iter()
                .map(|provider| DomainResolverResults {
                    provider: provider.id(),
                    results: provider.endpoints().iter().map(DomainResolverResult::skipped).collect(),
                })
                .collect();
            website.record_domain_results(index, domain_results);
        }
        website.mark_filtered_out();
    }

    async fn query_or_skip(&self, name: &Name, endpoint: &ResolverEndpoint) -> DomainResolverResult {
        let Some(shutdown) = self.shutdown.clone() else {
            return DomainResolverResult::new(endpoint, self.executor.query(name, endpoint).await);
        };

        if self.is_cancelled() {
            counter!("dns_queries_cancelled_total").increment(1);
            return DomainResolverResult::skipped(endpoint);
        }

        tokio::select! {
            outcome = self.executor.query(name, endpoint) => DomainResolverResult::new(endpoint, outcome),
            _ = wait_for_shutdown(shutdown) => {
                counter!("dns_queries_cancelled_total").increment(1);
                debug!(resolver = %endpoint.address(), domain = %name, "Query cancelled");
                DomainResolverResult::skipped(endpoint)
            }
        }
    }
}

/// 等待关闭信号；发送端被丢弃时永远不会完成
async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    let stopped = shutdown.wait_for(|stop| *stop).await.is_ok();
    if !stopped {
        std::future::pending::<()>().await;
    }
}
