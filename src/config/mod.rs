// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理运行时配置设置和站点目录的加载
pub mod catalog;
pub mod settings;
