// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::{Domain, DomainResolverResult, SupportStatus, Website};

/// 查询结果计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultTally {
    pub found: usize,
    pub not_found: usize,
    pub not_checked: usize,
}

impl ResultTally {
    /// 统计一组查询结果
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a DomainResolverResult>) -> Self {
        results.into_iter().fold(Self::default(), |mut tally, result| {
            if !result.attempted() {
                tally.not_checked += 1;
            } else if result.found() {
                tally.found += 1;
            } else {
                tally.not_found += 1;
            }
            tally
        })
    }

    /// 将计数归约为支持状态
    ///
    /// 没有任何结果时视为 None
    pub fn status(&self) -> SupportStatus {
        if self.not_checked > 0 {
            SupportStatus::NotChecked
        } else if self.found > 0 && self.not_found == 0 {
            SupportStatus::Full
        } else if self.found == 0 {
            SupportStatus::None
        } else {
            SupportStatus::Partial
        }
    }
}

/// 根据一组域名的结果树计算支持状态
pub fn classify_domains(domains: &[Domain]) -> SupportStatus {
    ResultTally::from_results(domains.iter().flat_map(Domain::results)).status()
}

/// 计算网站的支持状态
///
/// 被分类过滤排除的网站总是 NotChecked
pub fn classify(website: &Website) -> SupportStatus {
    if website.is_filtered_out() {
        return SupportStatus::NotChecked;
    }
    classify_domains(website.domains())
}
