// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::domain::models::website::{SupportStatus, Website};
use crate::utils::text_processing::html_anchorify;

/// 未分类网站的归属分类名称
pub const UNCATEGORIZED: &str = "Uncategorized";

/// 网站分类
///
/// 持有网站在配置中的索引，以及各支持状态的计数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    /// 属于该分类的网站索引
    pub websites: Vec<usize>,
    pub count_full: usize,
    pub count_partial: usize,
    pub count_none: usize,
    pub count_not_checked: usize,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn html_anchor(&self) -> String {
        html_anchorify(&self.name)
    }

    /// 统计各支持状态的网站数量
    pub fn count_support(&mut self, websites: &[Website]) {
        self.count_full = 0;
        self.count_partial = 0;
        self.count_none = 0;
        self.count_not_checked = 0;

        for website in self.websites.iter().filter_map(|&i| websites.get(i)) {
            match website.support_status() {
                SupportStatus::Full => self.count_full += 1,
                SupportStatus::Partial => self.count_partial += 1,
                SupportStatus::None => self.count_none += 1,
                SupportStatus::NotChecked => self.count_not_checked += 1,
            }
        }
    }
}
