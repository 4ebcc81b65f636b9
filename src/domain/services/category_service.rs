// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{debug, info, warn};

use crate::domain::models::category::{Category, UNCATEGORIZED};
use crate::domain::models::website::Website;

/// 分类整理服务
///
/// 将检查完成的网站分入各自的分类，统计计数并排序
pub struct CategoryService;

impl CategoryService {
    /// 完整整理流程：排序分类、分入网站、计数、分类内排序
    pub fn organize(mut categories: Vec<Category>, websites: &[Website]) -> Vec<Category> {
        Self::sort_categories(&mut categories);
        Self::sort_websites_into_categories(&mut categories, websites);
        Self::count_support(&mut categories, websites);
        Self::sort_websites_inside_categories(&mut categories, websites);
        categories
    }

    /// 按名称对分类排序
    pub fn sort_categories(categories: &mut [Category]) {
        info!("Sorting categories");
        categories.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// 将网站分入分类
    ///
    /// 一个网站可以属于多个分类；没有匹配任何分类的网站进入 Uncategorized
    pub fn sort_websites_into_categories(categories: &mut Vec<Category>, websites: &[Website]) {
        info!("Sorting websites into categories");

        for (index, website) in websites.iter().enumerate() {
            let mut was_sorted = false;

            for website_category in &website.categories {
                if let Some(category) = categories.iter_mut().find(|c| &c.name == website_category) {
                    category.websites.push(index);
                    was_sorted = true;
                    debug!(website = %website.name, category = %website_category, "Sorted website into category");
                }
            }

            if !was_sorted {
                Self::uncategorized(categories).websites.push(index);
                warn!(website = %website.name, "Website was not sorted into a category. Sorted into Uncategorized!");
            }
        }

        info!("Finished sorting websites into categories");
    }

    /// 统计每个分类的支持状态计数
    pub fn count_support(categories: &mut [Category], websites: &[Website]) {
        info!("Generating category counters");
        for category in categories.iter_mut() {
            category.count_support(websites);
        }
    }

    /// 按网站名称对分类内的网站排序
    pub fn sort_websites_inside_categories(categories: &mut [Category], websites: &[Website]) {
        info!("Sorting websites inside categories");
        for category in categories.iter_mut() {
            category.websites.sort_by(|&a, &b| {
                let name_a = websites.get(a).map(|w| w.name.as_str()).unwrap_or_default();
                let name_b = websites.get(b).map(|w| w.name.as_str()).unwrap_or_default();
                name_a.cmp(name_b)
            });
        }
    }

    fn uncategorized(categories: &mut Vec<Category>) -> &mut Category {
        let position = match categories.iter().position(|c| c.name == UNCATEGORIZED) {
            Some(position) => position,
            None => {
                categories.push(Category::new(UNCATEGORIZED, ""));
                categories.len() - 1
            }
        };
        &mut categories[position]
    }
}
