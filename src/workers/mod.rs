// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供固定规模的解析工作池
/// 包括单个网站的域名扫描、工作器循环和工作池生命周期管理
pub mod domain_scanner;
pub mod manager;
pub mod resolver_worker;

pub use manager::WorkerManager;
