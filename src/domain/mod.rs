// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：解析器、网站、域名结果树和分类
/// - 服务（services）：支持状态分类和分类整理
///
/// 领域层不依赖于网络实现，结果树和分类规则都是纯数据操作。
pub mod models;
pub mod services;
