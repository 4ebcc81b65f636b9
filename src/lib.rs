// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 命令行模块
///
/// 定义命令行参数及其到配置覆盖项的映射
pub mod cli;

/// 配置模块
///
/// 处理运行时配置设置和站点目录
pub mod config;

/// 领域模块
///
/// 包含网站、域名、解析器等核心实体以及分类服务
pub mod domain;

/// 引擎模块
///
/// 实现 DNS 传输层和带重试的 AAAA 查询执行器
pub mod engines;

/// 基础设施模块
///
/// 提供指标记录器
pub mod infrastructure;

/// 表示层模块
///
/// 渲染报告页面并写出输出文件
pub mod presentation;

/// 队列模块
///
/// 实现工作器共享的有界网站队列
pub mod queue;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现解析工作池
pub mod workers;
