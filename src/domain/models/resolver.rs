// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 标准 DNS 端口
pub const DNS_PORT: u16 = 53;

/// 解析器端点
///
/// 一个解析器的网络地址（IPv4 或带方括号的 IPv6 字面量），
/// 以及所属提供商的名称。构造后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverEndpoint {
    /// 可直接与端口拼接的地址
    address: String,
    /// 所属提供商名称（只读引用，不拥有提供商）
    provider: Arc<str>,
}

impl ResolverEndpoint {
    /// 创建新的解析器端点
    ///
    /// 含冒号的地址被视为 IPv6 字面量并加上方括号
    pub fn new(address: &str, provider: Arc<str>) -> Self {
        Self {
            address: normalize_address(address),
            provider,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// 渲染为 `address:port` 形式的网络目标
    pub fn target(&self, port: u16) -> String {
        format!("{}:{}", self.address, port)
    }
}

/// 规范化解析器地址
///
/// IPv6 字面量直接拼接端口会产生歧义，因此需要加上方括号
pub fn normalize_address(address: &str) -> String {
    let address = address.trim();
    if address.contains(':') && !address.starts_with('[') {
        format!("[{}]", address)
    } else {
        address.to_string()
    }
}

/// 解析器提供商
///
/// 一组解析器端点，代表一个独立的运营方或观测点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverProvider {
    name: Arc<str>,
    endpoints: Vec<ResolverEndpoint>,
}

impl ResolverProvider {
    /// 从地址列表创建提供商，保留配置中的端点顺序
    pub fn new<S: AsRef<str>>(name: &str, addresses: &[S]) -> Self {
        let name: Arc<str> = Arc::from(name);
        let endpoints = addresses
            .iter()
            .map(|address| ResolverEndpoint::new(address.as_ref(), name.clone()))
            .collect();

        Self { name, endpoints }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 提供商标识，供结果树引用
    pub fn id(&self) -> Arc<str> {
        self.name.clone()
    }

    pub fn endpoints(&self) -> &[ResolverEndpoint] {
        &self.endpoints
    }
}

/// 解析器注册表
///
/// 所有工作器只读共享
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolverRegistry {
    providers: Vec<ResolverProvider>,
}

impl ResolverRegistry {
    /// 从 提供商名称 → 地址列表 的映射构建注册表
    ///
    /// 提供商按名称排序，端点保持配置顺序
    pub fn from_config(resolvers: &BTreeMap<String, Vec<String>>) -> Self {
        let providers = resolvers
            .iter()
            .map(|(name, addresses)| ResolverProvider::new(name, addresses))
            .collect();

        Self { providers }
    }

    pub fn from_providers(providers: Vec<ResolverProvider>) -> Self {
        Self { providers }
    }

    pub fn providers(&self) -> &[ResolverProvider] {
        &self.providers
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// 所有提供商的端点总数
    pub fn endpoint_count(&self) -> usize {
        self.providers.iter().map(|p| p.endpoints.len()).sum()
    }
}
