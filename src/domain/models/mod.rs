// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 解析器（resolver）：解析器端点、提供商和注册表
/// - 网站（website）：网站、域名以及每个解析器的查询结果树
/// - 分类（category）：网站分组和支持状态计数
pub mod category;
pub mod resolver;
pub mod website;
