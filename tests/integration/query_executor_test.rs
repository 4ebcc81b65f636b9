// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Name;
use ipv6_watch::domain::models::resolver::ResolverEndpoint;
use ipv6_watch::domain::models::website::QueryOutcome;
use ipv6_watch::engines::query_executor::QueryExecutor;
use ipv6_watch::utils::retry_policy::RetryPolicy;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use super::helpers::scripted_transport::{ScriptedTransport, Step};

const TARGET: &str = "192.0.2.53:53";

fn endpoint() -> ResolverEndpoint {
    ResolverEndpoint::new("192.0.2.53", Arc::from("Test"))
}

fn name() -> Name {
    Name::from_ascii("example.test.").unwrap()
}

#[tokio::test]
async fn test_first_attempt_success_makes_exactly_one_call() {
    let transport = Arc::new(ScriptedTransport::new(Step::Aaaa));
    let executor = QueryExecutor::new(transport.clone(), RetryPolicy::standard());

    let outcome = executor.query(&name(), &endpoint()).await;

    assert_eq!(outcome, QueryOutcome::Found);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_no_aaaa_is_not_found_without_retry() {
    let transport = Arc::new(ScriptedTransport::new(Step::NoAaaa));
    let executor = QueryExecutor::new(transport.clone(), RetryPolicy::standard());

    assert_eq!(executor.query(&name(), &endpoint()).await, QueryOutcome::NotFound);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_transport_failures_stop_after_max_attempts() {
    let transport = Arc::new(ScriptedTransport::new(Step::Timeout));
    let executor = QueryExecutor::new(transport.clone(), RetryPolicy::standard());

    let outcome = executor.query(&name(), &endpoint()).await;

    assert_eq!(outcome, QueryOutcome::GaveUp);
    assert!(!outcome.found());
    assert!(outcome.attempted());
    assert_eq!(transport.calls_to(TARGET), 5);
}

#[tokio::test(start_paused = true)]
async fn test_recovers_after_transient_failures() {
    let transport = Arc::new(
        ScriptedTransport::new(Step::Timeout).script(TARGET, &[Step::Timeout, Step::Timeout, Step::Aaaa]),
    );
    let executor = QueryExecutor::new(transport.clone(), RetryPolicy::standard());

    assert_eq!(executor.query(&name(), &endpoint()).await, QueryOutcome::Found);
    assert_eq!(transport.call_count(), 3);
}

#[tokio::test]
async fn test_rejected_response_is_not_retried() {
    let transport = Arc::new(ScriptedTransport::new(Step::Rcode(ResponseCode::NXDomain)));
    let executor = QueryExecutor::new(transport.clone(), RetryPolicy::standard());

    let outcome = executor.query(&name(), &endpoint()).await;

    assert_eq!(
        outcome,
        QueryOutcome::Rejected {
            rcode: u16::from(ResponseCode::NXDomain)
        }
    );
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_servfail_is_not_retried() {
    let transport = Arc::new(ScriptedTransport::new(Step::Rcode(ResponseCode::ServFail)));
    let executor = QueryExecutor::new(transport.clone(), RetryPolicy::standard());

    assert!(matches!(
        executor.query(&name(), &endpoint()).await,
        QueryOutcome::Rejected { .. }
    ));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_backoff_is_linear() {
    let transport = Arc::new(ScriptedTransport::new(Step::Timeout));
    let executor = QueryExecutor::new(transport, RetryPolicy::standard());

    let started = Instant::now();
    executor.query(&name(), &endpoint()).await;
    let elapsed = started.elapsed();

    // 0 + 100 + 200 + 300 + 400 ms
    assert!(elapsed >= Duration::from_millis(1000), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(1100), "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn test_custom_port_is_used_for_target() {
    let transport = Arc::new(ScriptedTransport::new(Step::Aaaa));
    let executor = QueryExecutor::new(transport.clone(), RetryPolicy::standard()).with_port(5353);

    executor.query(&name(), &endpoint()).await;

    assert_eq!(transport.calls_to("192.0.2.53:5353"), 1);
}
