// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use ipv6_watch::domain::models::website::{SupportStatus, Website};
use ipv6_watch::engines::query_executor::QueryExecutor;
use ipv6_watch::utils::retry_policy::RetryPolicy;
use ipv6_watch::workers::domain_scanner::DomainScanner;
use ipv6_watch::workers::manager::WorkerManager;
use std::sync::Arc;
use std::time::Duration;

use super::helpers::scripted_transport::{ScriptedTransport, Step};
use super::helpers::{registry, website};

fn manager(transport: Arc<ScriptedTransport>, workers: usize) -> WorkerManager<Arc<ScriptedTransport>> {
    let executor = Arc::new(QueryExecutor::new(transport, RetryPolicy::standard()));
    let scanner = DomainScanner::new(executor, registry(&[("A", &["192.0.2.1"]), ("B", &["192.0.2.2"])]));
    WorkerManager::new(scanner, workers, 2)
}

#[test]
fn test_queue_capacity_follows_worker_count() {
    let transport = Arc::new(ScriptedTransport::new(Step::Aaaa));
    let manager = manager(transport, 30);

    assert_eq!(manager.worker_count(), 30);
    assert_eq!(manager.queue_capacity(), 60);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_results_come_back_in_configuration_order() {
    let transport = Arc::new(ScriptedTransport::new(Step::Aaaa));
    let manager = manager(transport.clone(), 3);

    let websites: Vec<Website> = (0..25)
        .map(|i| {
            let host = format!("site{}.test", i);
            website(&format!("Site {:02}", i), &[host.as_str()])
        })
        .collect();

    let checked = manager.check_all(websites).await.unwrap();

    let names: Vec<String> = checked.iter().map(|w| w.name.clone()).collect();
    let expected: Vec<String> = (0..25).map(|i| format!("Site {:02}", i)).collect();
    assert_eq!(names, expected);
    assert!(checked.iter().all(|w| w.support_status() == SupportStatus::Full));
    // 25 websites x 2 endpoints, each website scanned exactly once
    assert_eq!(transport.call_count(), 50);
}

#[tokio::test]
async fn test_more_workers_than_websites() {
    let transport = Arc::new(ScriptedTransport::new(Step::NoAaaa));
    let manager = manager(transport, 30);

    let checked = manager
        .check_all(vec![website("Only", &["only.test"])])
        .await
        .unwrap();

    assert_eq!(checked.len(), 1);
    assert_eq!(checked[0].support_status(), SupportStatus::None);
}

#[tokio::test]
async fn test_empty_catalog_completes() {
    let transport = Arc::new(ScriptedTransport::new(Step::Aaaa));
    let manager = manager(transport.clone(), 4);

    let checked = manager.check_all(Vec::new()).await.unwrap();

    assert!(checked.is_empty());
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_check_duration_covers_retry_backoff() {
    let transport = Arc::new(ScriptedTransport::new(Step::Timeout));
    let manager = manager(transport.clone(), 2);

    let checked = manager
        .check_all(vec![website("Example", &["example.test"])])
        .await
        .unwrap();

    // Each endpoint waits 0 + 100 + 200 + 300 + 400 ms before giving up
    assert!(checked[0].check_duration() >= Duration::from_secs(1));
    assert_eq!(checked[0].domains()[0].resolver_results().len(), 2);
    assert_eq!(transport.call_count(), 10);
}
