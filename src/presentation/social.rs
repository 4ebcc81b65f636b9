// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website::Website;

/// 每组列出的账号数量，组之间空两行
const HANDLES_PER_GROUP: usize = 5;

/// Twitter 个人页地址，去掉句柄中的 `@`
pub fn twitter_profile_url(handle: &str) -> String {
    format!("https://twitter.com/{}", handle.replace('@', ""))
}

/// 列出所有带 Twitter 账号的网站
///
/// 每行格式为 `名称 -> 个人页地址`
pub fn render_twitter_handles(websites: &[Website]) -> String {
    let mut out = String::new();
    let with_handle = websites.iter().filter(|w| !w.twitter.is_empty());

    for (position, website) in with_handle.enumerate() {
        out.push_str(&format!("{} -> {}\n", website.name, twitter_profile_url(&website.twitter)));

        if (position + 1) % HANDLES_PER_GROUP == 0 {
            out.push_str("\n\n");
        }
    }

    out
}
