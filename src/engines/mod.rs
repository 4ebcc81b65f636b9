// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 查询引擎模块
///
/// 实现 DNS 传输和带重试的 AAAA 查询执行器
pub mod query_executor;
pub mod traits;
pub mod udp_transport;
