// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;

use crate::config::settings::SettingsOverrides;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "ipv6-watch", version, about = "Check which websites are reachable over IPv6")]
pub struct Cli {
    /// Minify the generated page
    #[arg(long)]
    pub minify: bool,

    /// What log level to use (info, error, debug)
    #[arg(long = "loglevel")]
    pub log_level: Option<String>,

    /// Only query websites in this category; "none" checks everything
    #[arg(long = "category-limit")]
    pub category_limit: Option<String>,

    /// Path to the site catalog
    #[arg(long = "config")]
    pub catalog: Option<String>,

    /// Output directory
    #[arg(long)]
    pub dist: Option<String>,

    /// List the websites' Twitter accounts and exit without checking
    #[arg(long)]
    pub twitter: bool,
}

impl Cli {
    /// 转换为配置覆盖项，未指定的参数不覆盖配置
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            catalog_path: self.catalog.clone(),
            dist_dir: self.dist.clone(),
            minify: self.minify.then_some(true),
            log_level: self.log_level.clone(),
            category_limit: self.category_limit.clone(),
        }
    }
}
