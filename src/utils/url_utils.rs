// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Host;

use crate::utils::errors::DomainNameError;

/// 将（可能包含非 ASCII 字符的）域名转换为 punycode 形式
///
/// 转换由 URL 主机解析器完成，结果为小写且不带末尾的点。
/// IP 字面量不是可查询 AAAA 记录的域名，会被拒绝。
pub fn to_ascii_domain(domain: &str) -> Result<String, DomainNameError> {
    let trimmed = domain.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(DomainNameError::Empty);
    }

    match Host::parse(trimmed) {
        Ok(Host::Domain(ascii)) => Ok(ascii),
        Ok(Host::Ipv4(_)) | Ok(Host::Ipv6(_)) => Err(DomainNameError::InvalidName {
            domain: domain.to_string(),
            reason: "IP literal instead of a host name".to_string(),
        }),
        Err(e) => Err(DomainNameError::Idna {
            domain: domain.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// 将域名转换为以点结尾的完全限定形式
pub fn to_fqdn(ascii_domain: &str) -> String {
    if ascii_domain.ends_with('.') {
        ascii_domain.to_string()
    } else {
        format!("{}.", ascii_domain)
    }
}
