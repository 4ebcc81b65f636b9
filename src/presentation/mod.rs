// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 渲染报告页面、写出输出文件以及列出 Twitter 账号
pub mod html;
pub mod report;
pub mod social;
