// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::models::category::Category;
use crate::domain::models::resolver::ResolverRegistry;
use crate::domain::models::website::Website;

/// 站点目录错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("无法读取站点目录 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("无法解析站点目录: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("网站 {website} 使用了未定义的标签 {tag}")]
    UnknownTag { website: String, tag: String },
}

/// 目录中的分类条目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// 目录中的网站条目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebsiteEntry {
    pub name: String,
    #[serde(rename = "href", default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub categories: Vec<String>,
    /// 短标签，加载后展开为完整名称
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 站点目录
///
/// 列出解析器提供商、分类、网站、页面元数据和标签缩写
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteCatalog {
    #[serde(default)]
    pub resolvers: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
    #[serde(default)]
    pub websites: Vec<WebsiteEntry>,
    #[serde(default)]
    pub website_title: String,
    #[serde(default)]
    pub github_repo: String,
    #[serde(default)]
    pub website_description: String,
    #[serde(default)]
    pub website_url: String,
    /// 短标签 → 完整名称
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl SiteCatalog {
    /// 从文件加载站点目录
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        info!(path = %path.display(), "Loading site catalog");

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// 从 YAML 文本解析站点目录
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// 构建解析器注册表
    pub fn resolver_registry(&self) -> ResolverRegistry {
        ResolverRegistry::from_config(&self.resolvers)
    }

    /// 构建网站列表，短标签在此展开
    ///
    /// 任何未定义的短标签都会使整个目录无效
    pub fn websites(&self) -> Result<Vec<Website>, CatalogError> {
        self.websites.iter().map(|entry| self.build_website(entry)).collect()
    }

    fn build_website(&self, entry: &WebsiteEntry) -> Result<Website, CatalogError> {
        for host in &entry.hosts {
            debug!(website = %entry.name, domain = %host, "Found domain for website");
        }

        let mut website = Website::new(entry.name.clone(), entry.url.clone(), &entry.hosts)
            .with_categories(entry.categories.iter().cloned());
        website.description = entry.description.clone();
        website.icon = entry.icon.clone();
        website.twitter = entry.twitter.clone();
        website.tags = self.expand_tags(&entry.name, &entry.tags)?;

        Ok(website)
    }

    /// 把短标签展开为完整名称
    pub fn expand_tags(&self, website: &str, short_tags: &[String]) -> Result<Vec<String>, CatalogError> {
        short_tags
            .iter()
            .map(|tag| {
                self.tags.get(tag).cloned().ok_or_else(|| CatalogError::UnknownTag {
                    website: website.to_string(),
                    tag: tag.clone(),
                })
            })
            .collect()
    }

    /// 构建分类列表（尚未分配网站）
    pub fn categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|entry| Category::new(entry.name.clone(), entry.description.clone()))
            .collect()
    }

    /// 页面元数据
    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.website_title.clone(),
            github_repo: self.github_repo.clone(),
            description: self.website_description.clone(),
            url: self.website_url.clone(),
        }
    }
}

/// 报告页面的元数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub github_repo: String,
    pub description: String,
    pub url: String,
}
