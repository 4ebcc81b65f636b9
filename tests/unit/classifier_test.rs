// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 分类器性质测试
///
/// 枚举小规模结果组合，验证 NOT_CHECKED 优先以及 FULL/NONE/PARTIAL 的划分

#[cfg(test)]
mod tests {
    use ipv6_watch::domain::models::resolver::ResolverEndpoint;
    use ipv6_watch::domain::models::website::{DomainResolverResult, QueryOutcome, SupportStatus};
    use ipv6_watch::domain::services::classifier::ResultTally;
    use std::sync::Arc;

    fn results(found: usize, not_found: usize, skipped: usize) -> Vec<DomainResolverResult> {
        let endpoint = ResolverEndpoint::new("192.0.2.53", Arc::from("A"));
        let mut results = Vec::new();
        results.extend((0..found).map(|_| DomainResolverResult::new(&endpoint, QueryOutcome::Found)));
        results.extend((0..not_found).map(|i| {
            let outcome = match i % 3 {
                0 => QueryOutcome::NotFound,
                1 => QueryOutcome::GaveUp,
                _ => QueryOutcome::Rejected { rcode: 3 },
            };
            DomainResolverResult::new(&endpoint, outcome)
        }));
        results.extend((0..skipped).map(|_| DomainResolverResult::skipped(&endpoint)));
        results
    }

    #[test]
    fn test_status_for_every_small_combination() {
        for found in 0..4 {
            for not_found in 0..4 {
                for skipped in 0..3 {
                    let status = ResultTally::from_results(&results(found, not_found, skipped)).status();

                    let expected = if skipped > 0 {
                        SupportStatus::NotChecked
                    } else if found > 0 && not_found == 0 {
                        SupportStatus::Full
                    } else if found == 0 {
                        SupportStatus::None
                    } else {
                        SupportStatus::Partial
                    };

                    assert_eq!(
                        status, expected,
                        "found={} not_found={} skipped={}",
                        found, not_found, skipped
                    );
                }
            }
        }
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut forward = results(2, 2, 0);
        let status = ResultTally::from_results(&forward).status();
        forward.reverse();

        assert_eq!(ResultTally::from_results(&forward).status(), status);
        assert_eq!(status, SupportStatus::Partial);
    }
}
