// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 生成 HTML 锚点时要删除的字符
const ANCHOR_STRIP_CHARS: [char; 8] = [' ', '.', ',', 'ä', 'ö', 'ü', '/', '+'];

/// 将名称转换为 HTML 锚点
pub fn html_anchorify(name: &str) -> String {
    name.chars()
        .filter(|c| !ANCHOR_STRIP_CHARS.contains(c))
        .collect::<String>()
        .to_lowercase()
}
