// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::models::resolver::ResolverEndpoint;
use crate::domain::services::classifier;
use crate::utils::text_processing::html_anchorify;

/// IPv6 支持状态
///
/// 由网站的结果树推导得出，从不直接设置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportStatus {
    /// 所有查询都找到了 AAAA 记录
    Full,
    /// 部分查询找到了 AAAA 记录
    Partial,
    /// 没有任何查询找到 AAAA 记录
    None,
    /// 至少有一个查询被跳过
    NotChecked,
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SupportStatus::Full => write!(f, "full"),
            SupportStatus::Partial => write!(f, "partial"),
            SupportStatus::None => write!(f, "none"),
            SupportStatus::NotChecked => write!(f, "not_checked"),
        }
    }
}

/// 单次查询的详细结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum QueryOutcome {
    /// 应答成功且包含 AAAA 记录
    Found,
    /// 应答成功但没有 AAAA 记录
    NotFound,
    /// 应答返回了失败的响应码，不再重试
    Rejected { rcode: u16 },
    /// 所有尝试都遇到了传输错误
    GaveUp,
    /// 没有发出查询（分类过滤或取消）
    Skipped,
}

impl QueryOutcome {
    /// 是否找到了 AAAA 记录
    pub fn found(&self) -> bool {
        matches!(self, QueryOutcome::Found)
    }

    /// 是否真正发出了查询
    pub fn attempted(&self) -> bool {
        !matches!(self, QueryOutcome::Skipped)
    }
}

/// 一个域名针对一个解析器端点的查询结果
///
/// 两个布尔标志在构造时由 `outcome` 推导，之后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResolverResult {
    /// 解析器地址
    resolver: String,
    /// 是否找到 AAAA 记录
    found: bool,
    /// 是否真正发出了查询
    attempted: bool,
    /// 详细结果
    outcome: QueryOutcome,
}

impl DomainResolverResult {
    pub fn new(endpoint: &ResolverEndpoint, outcome: QueryOutcome) -> Self {
        Self {
            resolver: endpoint.address().to_string(),
            found: outcome.found(),
            attempted: outcome.attempted(),
            outcome,
        }
    }

    /// 被跳过的结果
    pub fn skipped(endpoint: &ResolverEndpoint) -> Self {
        Self::new(endpoint, QueryOutcome::Skipped)
    }

    pub fn resolver(&self) -> &str {
        &self.resolver
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    pub fn outcome(&self) -> QueryOutcome {
        self.outcome
    }
}

/// 一个域名在一个解析器提供商下的全部结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainResolverResults {
    /// 解析器提供商名称
    pub provider: Arc<str>,
    /// 按端点顺序排列的结果
    pub results: Vec<DomainResolverResult>,
}

/// 网站的一个域名及其结果树
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Domain {
    /// 配置中的原始域名
    pub name: String,
    /// 每个解析器提供商一个条目
    resolver_results: Vec<DomainResolverResults>,
}

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolver_results: Vec::new(),
        }
    }

    pub fn resolver_results(&self) -> &[DomainResolverResults] {
        &self.resolver_results
    }

    /// 遍历所有提供商下的所有结果
    pub fn results(&self) -> impl Iterator<Item = &DomainResolverResult> {
        self.resolver_results.iter().flat_map(|r| r.results.iter())
    }
}

/// 被检查的网站
#[derive(Debug, Clone, Serialize)]
pub struct Website {
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: String,
    pub twitter: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    domains: Vec<Domain>,
    /// 被分类过滤排除，没有发出任何查询
    filtered_out: bool,
    support_status: SupportStatus,
    check_duration_seconds: f64,
}

impl Website {
    /// 创建新网站并解析其域名列表
    pub fn new<S: AsRef<str>>(name: impl Into<String>, url: impl Into<String>, hosts: &[S]) -> Self {
        let domains: Vec<Domain> = hosts.iter().map(|h| Domain::new(h.as_ref())).collect();
        let support_status = classifier::classify_domains(&domains);

        Self {
            name: name.into(),
            url: url.into(),
            description: String::new(),
            icon: String::new(),
            twitter: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            domains,
            filtered_out: false,
            support_status,
            check_duration_seconds: 0.0,
        }
    }

    pub fn with_categories<S: Into<String>>(mut self, categories: impl IntoIterator<Item = S>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn support_status(&self) -> SupportStatus {
        self.support_status
    }

    pub fn check_duration(&self) -> Duration {
        Duration::from_secs_f64(self.check_duration_seconds)
    }

    pub fn set_check_duration(&mut self, duration: Duration) {
        self.check_duration_seconds = duration.as_secs_f64();
    }

    pub fn is_filtered_out(&self) -> bool {
        self.filtered_out
    }

    /// 写入一个域名的结果树并重新计算支持状态
    ///
    /// 索引越界时不做任何修改
    pub fn record_domain_results(&mut self, index: usize, results: Vec<DomainResolverResults>) {
        if let Some(domain) = self.domains.get_mut(index) {
            domain.resolver_results = results;
            self.refresh_status();
        }
    }

    /// 标记网站被分类过滤排除
    ///
    /// 不论域名列表是否为空、能否规范化，状态都固定为 NotChecked
    pub fn mark_filtered_out(&mut self) {
        self.filtered_out = true;
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.support_status = if self.filtered_out {
            SupportStatus::NotChecked
        } else {
            classifier::classify_domains(&self.domains)
        };
    }

    /// 网站是否属于给定分类
    pub fn is_in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn html_anchor(&self) -> String {
        html_anchorify(&self.name)
    }

    /// 图标是否为 Font Awesome 图标
    pub fn is_font_awesome_icon(&self) -> bool {
        self.icon.starts_with("fa-")
    }
}
