// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 分类器（classifier）：将结果树归约为支持状态
/// - 分类整理（category_service）：网站分组、计数与排序
pub mod category_service;
pub mod classifier;
