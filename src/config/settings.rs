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

use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::retry_policy::RetryPolicy;

/// 分类过滤的占位值，表示不过滤
pub const NO_CATEGORY_LIMIT: &str = "none";

/// 应用程序配置设置
///
/// 包含站点目录、扫描器、输出和日志等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 站点目录配置
    pub catalog: CatalogSettings,
    /// 扫描器配置
    pub scanner: ScannerSettings,
    /// 输出配置
    pub output: OutputSettings,
    /// 日志配置
    pub logging: LoggingSettings,
}

/// 站点目录配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// YAML 目录文件路径
    pub path: String,
}

/// 扫描器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerSettings {
    /// 并发工作器数量
    pub worker_count: usize,
    /// 队列容量系数
    pub queue_factor: usize,
    /// 每个端点的最大尝试次数
    pub max_attempts: u32,
    /// 线性退避单位（毫秒）
    pub backoff_unit_ms: u64,
    /// 单次查询超时时间（毫秒）
    pub query_timeout_ms: u64,
    /// 解析器端口
    pub dns_port: u16,
    /// 只检查该分类，`none` 表示检查全部
    pub category_limit: String,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 输出目录
    pub dist_dir: String,
    /// 是否压缩 HTML
    pub minify: bool,
    /// `lastchecked.txt` 使用的时区
    pub timezone: String,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 日志级别 (info, error, debug)
    pub level: String,
}

/// 命令行覆盖项，优先级最高
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub catalog_path: Option<String>,
    pub dist_dir: Option<String>,
    pub minify: Option<bool>,
    pub log_level: Option<String>,
    pub category_limit: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&SettingsOverrides::default())
    }

    /// 加载配置并应用命令行覆盖项
    pub fn load(overrides: &SettingsOverrides) -> Result<Self, ConfigError> {
        Self::load_from_dir(Path::new("config"), overrides)
    }

    /// 从指定目录加载配置文件
    ///
    /// # Arguments
    ///
    /// * `config_dir` - 存放 `default` 与 `{APP_ENVIRONMENT}` 配置文件的目录
    /// * `overrides` - 命令行覆盖项
    pub fn load_from_dir(config_dir: &Path, overrides: &SettingsOverrides) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(&env);
        let default_file = default_file.to_string_lossy();
        let env_file = env_file.to_string_lossy();

        let builder = Config::builder()
            .set_default("catalog.path", "config.yml")?
            // Scanner defaults
            .set_default("scanner.worker_count", 30)?
            .set_default("scanner.queue_factor", 2)?
            .set_default("scanner.max_attempts", 5)?
            .set_default("scanner.backoff_unit_ms", 100)?
            .set_default("scanner.query_timeout_ms", 2000)?
            .set_default("scanner.dns_port", 53)?
            .set_default("scanner.category_limit", NO_CATEGORY_LIMIT)?
            // Output defaults
            .set_default("output.dist_dir", "dist")?
            .set_default("output.minify", false)?
            .set_default("output.timezone", "Europe/Berlin")?
            .set_default("logging.level", "error")?
            .add_source(File::with_name(&default_file).required(false))
            .add_source(File::with_name(&env_file).required(false))
            .add_source(Environment::with_prefix("IPV6WATCH").separator("__"))
            .set_override_option("catalog.path", overrides.catalog_path.clone())?
            .set_override_option("output.dist_dir", overrides.dist_dir.clone())?
            .set_override_option("output.minify", overrides.minify)?
            .set_override_option("logging.level", overrides.log_level.clone())?
            .set_override_option("scanner.category_limit", overrides.category_limit.clone())?;

        builder.build()?.try_deserialize()
    }

    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.catalog.path)
    }

    pub fn dist_dir(&self) -> PathBuf {
        PathBuf::from(&self.output.dist_dir)
    }
}

impl ScannerSettings {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.backoff_unit_ms))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// 生效的分类过滤，`none` 或空值返回 `None`
    pub fn category_filter(&self) -> Option<String> {
        let limit = self.category_limit.trim();
        if limit.is_empty() || limit.eq_ignore_ascii_case(NO_CATEGORY_LIMIT) {
            None
        } else {
            Some(limit.to_string())
        }
    }
}

impl OutputSettings {
    /// 解析配置的时区名称
    pub fn time_zone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::Message(format!("invalid time zone '{}': {}", self.timezone, e)))
    }
}
