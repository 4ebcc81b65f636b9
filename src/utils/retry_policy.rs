// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 默认最大尝试次数
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// 默认退避单位
pub const DEFAULT_BACKOFF_UNIT: Duration = Duration::from_millis(100);

/// 重试策略配置
///
/// DNS 查询使用线性退避：第 `n` 次尝试（从 0 开始）之前等待 `n × backoff_unit`，
/// 因此第一次尝试不会被延迟。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最大尝试次数（包含第一次）
    pub max_attempts: u32,
    /// 退避单位
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_unit: DEFAULT_BACKOFF_UNIT,
        }
    }
}

impl RetryPolicy {
    /// 创建标准重试策略
    pub fn standard() -> Self {
        Self::default()
    }

    /// 创建自定义重试策略
    ///
    /// `max_attempts` 至少为 1，否则查询永远不会被发出
    pub fn new(max_attempts: u32, backoff_unit: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_unit,
        }
    }

    /// 计算第 `attempt` 次尝试之前的退避时间
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        self.backoff_unit.saturating_mul(attempt)
    }

    /// 是否还允许第 `attempt` 次尝试
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// 所有尝试的累计等待时间上限
    pub fn total_backoff(&self) -> Duration {
        (0..self.max_attempts)
            .map(|attempt| self.calculate_backoff(attempt))
            .sum()
    }
}
