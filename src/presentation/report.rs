// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::config::catalog::PageMeta;
use crate::domain::models::category::Category;
use crate::domain::models::website::Website;
use crate::presentation::html::{minify_html, render_page};

pub const INDEX_FILE: &str = "index.html";
pub const RESULTS_FILE: &str = "results.json";
pub const LAST_CHECKED_FILE: &str = "lastchecked.txt";
pub const METRICS_FILE: &str = "metrics.prom";

/// 报告输出错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("无法写入 {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("无法序列化检查结果: {0}")]
    Json(#[from] serde_json::Error),
}

/// `results.json` 的内容
#[derive(Debug, Serialize)]
pub struct ResultsDocument<'a> {
    pub generated_at: DateTime<Utc>,
    pub categories: &'a [Category],
    pub websites: &'a [Website],
}

/// 报告写入器
///
/// 所有文件写入同一个输出目录，任何写入失败都是致命错误
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dist_dir: PathBuf,
    minify: bool,
    time_zone: Tz,
}

impl ReportWriter {
    pub fn new(dist_dir: impl Into<PathBuf>, minify: bool, time_zone: Tz) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            minify,
            time_zone,
        }
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// 渲染并写出页面、结果和检查时间
    pub fn write_report(
        &self,
        meta: &PageMeta,
        categories: &[Category],
        websites: &[Website],
        now: DateTime<Utc>,
    ) -> Result<(), ReportError> {
        self.ensure_dist_dir()?;

        let mut page = render_page(meta, categories, websites, now);
        if self.minify {
            page = minify_html(&page);
        }

        info!("Writing page to disk");
        self.write_file(INDEX_FILE, page.as_bytes())?;
        info!("Wrote page to {}", INDEX_FILE);

        let document = ResultsDocument {
            generated_at: now,
            categories,
            websites,
        };
        self.write_file(RESULTS_FILE, &serde_json::to_vec_pretty(&document)?)?;

        info!("Writing current timestamp to file");
        self.write_file(LAST_CHECKED_FILE, self.last_checked(now).as_bytes())?;

        Ok(())
    }

    /// 写出指标快照
    pub fn write_metrics(&self, rendered: &str) -> Result<(), ReportError> {
        self.ensure_dist_dir()?;
        self.write_file(METRICS_FILE, rendered.as_bytes())
    }

    /// 配置时区下的 RFC 3339 时间戳
    pub fn last_checked(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.time_zone)
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn ensure_dist_dir(&self) -> Result<(), ReportError> {
        fs::create_dir_all(&self.dist_dir).map_err(|source| ReportError::Io {
            path: self.dist_dir.display().to_string(),
            source,
        })
    }

    fn write_file(&self, name: &str, content: &[u8]) -> Result<(), ReportError> {
        let path = self.dist_dir.join(name);
        fs::write(&path, content).map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
