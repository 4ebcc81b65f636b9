// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Datelike, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::info;
use url::form_urlencoded;

use crate::config::catalog::PageMeta;
use crate::domain::models::category::Category;
use crate::domain::models::website::{SupportStatus, Website};

/// 支持状态对应的提示语
pub fn support_message(status: SupportStatus) -> &'static str {
    match status {
        SupportStatus::NotChecked => "Not checked!",
        SupportStatus::Full => "Yay! Full IPv6 Support!",
        SupportStatus::Partial => "Partial IPv6 support!",
        SupportStatus::None => "No IPv6 support!",
    }
}

/// 卡片的左边框与背景样式
pub fn card_class(status: SupportStatus) -> &'static str {
    match status {
        SupportStatus::NotChecked => "border-left-secondary border-secondary",
        SupportStatus::Full => "border-left-success border-success",
        SupportStatus::Partial => "border-left-warning border-warning",
        SupportStatus::None => "border-left-danger border-danger",
    }
}

/// 卡片的边框颜色
pub fn border_class(status: SupportStatus) -> &'static str {
    match status {
        SupportStatus::NotChecked => "border-dark",
        SupportStatus::Full => "border-success",
        SupportStatus::Partial => "border-warning",
        SupportStatus::None => "border-danger",
    }
}

/// 根据支持状态生成推文内容
pub fn twitter_message(website: &Website) -> String {
    let message = match website.support_status() {
        SupportStatus::Full => "Thanks for serving your website over IPv6!",
        SupportStatus::Partial => "Can you please improve your IPv6 support?",
        _ => "Isn't it about time to provide IPv6 on your website?",
    };

    format!(".{} {} #ipv6", website.twitter, message)
}

/// 渲染报告页面
///
/// `categories` 中的网站索引指向 `websites`
pub fn render_page(
    meta: &PageMeta,
    categories: &[Category],
    websites: &[Website],
    generated_at: DateTime<Utc>,
) -> String {
    info!("Rendering page");

    let mut out = String::new();
    let title = encode_text(&meta.title);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("  <title>{}</title>\n", title));
    out.push_str(&format!(
        "  <meta name=\"description\" content=\"{}\">\n",
        encode_double_quoted_attribute(&meta.description)
    ));
    if !meta.url.is_empty() {
        out.push_str(&format!(
            "  <link rel=\"canonical\" href=\"{}\">\n",
            encode_double_quoted_attribute(&meta.url)
        ));
    }
    out.push_str("</head>\n<body>\n");

    out.push_str(&format!("<header>\n  <h1>{}</h1>\n", title));
    out.push_str(&format!("  <p>{}</p>\n", encode_text(&meta.description)));
    out.push_str("  <nav>\n    <ul>\n");
    for category in categories {
        out.push_str(&format!(
            "      <li><a href=\"#{}\">{}</a></li>\n",
            encode_double_quoted_attribute(&category.html_anchor()),
            encode_text(&category.name)
        ));
    }
    out.push_str("    </ul>\n  </nav>\n</header>\n<main>\n");

    for category in categories {
        render_category(&mut out, category, websites);
    }

    out.push_str("</main>\n<footer>\n");
    out.push_str(&format!(
        "  <p>Generated {} &middot; &copy; {}</p>\n",
        generated_at.format("%d %b %y %H:%M UTC"),
        generated_at.year()
    ));
    if !meta.github_repo.is_empty() {
        out.push_str(&format!(
            "  <p><a href=\"{}\">Source on GitHub</a></p>\n",
            encode_double_quoted_attribute(&meta.github_repo)
        ));
    }
    out.push_str("</footer>\n</body>\n</html>\n");

    info!("Rendering done");
    out
}

fn render_category(out: &mut String, category: &Category, websites: &[Website]) {
    out.push_str(&format!(
        "<section id=\"{}\">\n",
        encode_double_quoted_attribute(&category.html_anchor())
    ));
    out.push_str(&format!("  <h2>{}</h2>\n", encode_text(&category.name)));
    if !category.description.is_empty() {
        out.push_str(&format!("  <p>{}</p>\n", encode_text(&category.description)));
    }
    out.push_str(&format!(
        "  <p class=\"counters\"><span class=\"text-success\">{}</span> / <span class=\"text-warning\">{}</span> / <span class=\"text-danger\">{}</span> / <span class=\"text-secondary\">{}</span></p>\n",
        category.count_full,
        category.count_partial,
        category.count_none,
        category.count_not_checked
    ));

    for website in category.websites.iter().filter_map(|&i| websites.get(i)) {
        render_website(out, website);
    }

    out.push_str("</section>\n");
}

fn render_website(out: &mut String, website: &Website) {
    let status = website.support_status();

    out.push_str(&format!(
        "  <article id=\"{}\" class=\"card {} {}\">\n",
        encode_double_quoted_attribute(&website.html_anchor()),
        card_class(status),
        border_class(status)
    ));

    if website.is_font_awesome_icon() {
        out.push_str(&format!(
            "    <i class=\"fa {}\"></i>\n",
            encode_double_quoted_attribute(&website.icon)
        ));
    } else if !website.icon.is_empty() {
        out.push_str(&format!(
            "    <img src=\"{}\" alt=\"\">\n",
            encode_double_quoted_attribute(&website.icon)
        ));
    }

    out.push_str(&format!(
        "    <h3><a href=\"{}\">{}</a></h3>\n",
        encode_double_quoted_attribute(&website.url),
        encode_text(&website.name)
    ));
    if !website.description.is_empty() {
        out.push_str(&format!("    <p>{}</p>\n", encode_text(&website.description)));
    }
    out.push_str(&format!("    <p class=\"status\">{}</p>\n", support_message(status)));

    if !website.tags.is_empty() {
        out.push_str("    <ul class=\"tags\">\n");
        for tag in &website.tags {
            out.push_str(&format!("      <li>{}</li>\n", encode_text(tag)));
        }
        out.push_str("    </ul>\n");
    }

    out.push_str("    <details>\n      <summary>Details</summary>\n");
    for domain in website.domains() {
        out.push_str(&format!("      <h4>{}</h4>\n", encode_text(&domain.name)));
        out.push_str("      <ul>\n");
        for provider_results in domain.resolver_results() {
            for result in &provider_results.results {
                let mark = match (result.attempted(), result.found()) {
                    (false, _) => "skipped",
                    (true, true) => "AAAA",
                    (true, false) => "no AAAA",
                };
                out.push_str(&format!(
                    "        <li>{} ({}): {}</li>\n",
                    encode_text(&provider_results.provider),
                    encode_text(result.resolver()),
                    mark
                ));
            }
        }
        out.push_str("      </ul>\n");
    }
    out.push_str(&format!(
        "      <p>Checked in {:.2}s</p>\n",
        website.check_duration().as_secs_f64()
    ));
    out.push_str("    </details>\n");

    if !website.twitter.is_empty() {
        let text: String = form_urlencoded::byte_serialize(twitter_message(website).as_bytes()).collect();
        out.push_str(&format!(
            "    <a class=\"tweet\" href=\"https://twitter.com/intent/tweet?text={}\">Tweet</a>\n",
            encode_double_quoted_attribute(&text)
        ));
    }

    out.push_str("  </article>\n");
}

/// 压缩 HTML
///
/// 空白串折叠为一个空格；只有标签之间的换行和缩进被完全删除，
/// 文本中的换行保留为一个空格
pub fn minify_html(page: &str) -> String {
    info!("Minifying page");

    let mut minified = String::with_capacity(page.len());
    for line in page.lines() {
        let mut words = line.split_whitespace().peekable();
        let Some(first) = words.peek() else {
            continue;
        };
        if !minified.is_empty() && !(minified.ends_with('>') && first.starts_with('<')) {
            minified.push(' ');
        }
        for (i, word) in words.enumerate() {
            if i > 0 {
                minified.push(' ');
            }
            minified.push_str(word);
        }
    }

    info!("Minifying done");
    minified
}
