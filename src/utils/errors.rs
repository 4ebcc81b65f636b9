// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 域名规范化错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainNameError {
    #[error("域名为空")]
    Empty,

    #[error("无法转换为 punycode: {domain}: {reason}")]
    Idna { domain: String, reason: String },

    #[error("不是合法的 DNS 名称: {domain}: {reason}")]
    InvalidName { domain: String, reason: String },
}

/// Worker错误类型
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("队列已关闭")]
    QueueClosed,

    #[error("工作器异常退出: {0}")]
    Panicked(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}
