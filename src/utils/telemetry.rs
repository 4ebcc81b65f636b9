// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "error";

/// 把命令行中的日志级别映射为过滤指令
///
/// 只接受 info、error、debug，其余值回退到 error
pub fn filter_directive(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "info" => "info",
        "debug" => "debug",
        "error" => "error",
        _ => DEFAULT_LOG_LEVEL,
    }
}

/// 初始化日志
///
/// `RUST_LOG` 存在时优先使用，否则使用传入的级别
pub fn init_telemetry(level: &str) {
    let directive = filter_directive(level);
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .try_init();
}
