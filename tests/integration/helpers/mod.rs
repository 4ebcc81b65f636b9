// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod fake_dns_server;

use ipv6_watch::domain::models::resolver::{ResolverProvider, ResolverRegistry};
use ipv6_watch::domain::models::website::Website;
use std::sync::Arc;

/// 构建测试用注册表，每项为 (提供商名称, 地址列表)
pub fn registry(providers: &[(&str, &[&str])]) -> Arc<ResolverRegistry> {
    Arc::new(ResolverRegistry::from_providers(
        providers
            .iter()
            .map(|&(name, addresses)| ResolverProvider::new(name, addresses))
            .collect(),
    ))
}

pub fn website(name: &str, hosts: &[&str]) -> Website {
    Website::new(name, format!("https://{}", hosts.first().copied().unwrap_or("example.test")), hosts)
}
