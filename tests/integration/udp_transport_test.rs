// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hickory_proto::op::ResponseCode;
use ipv6_watch::domain::models::resolver::ResolverEndpoint;
use ipv6_watch::domain::models::website::{QueryOutcome, SupportStatus};
use ipv6_watch::engines::query_executor::{build_aaaa_query, normalize_domain, QueryExecutor};
use ipv6_watch::engines::traits::DnsTransport;
use ipv6_watch::engines::udp_transport::UdpTransport;
use ipv6_watch::utils::retry_policy::RetryPolicy;
use ipv6_watch::workers::domain_scanner::DomainScanner;
use std::sync::Arc;
use std::time::Duration;

use super::helpers::fake_dns_server::{FakeDnsServer, FakeZone};
use super::helpers::{registry, website};

fn transport() -> UdpTransport {
    UdpTransport::new(Duration::from_secs(2))
}

#[tokio::test]
async fn test_udp_exchange_against_loopback_server() {
    let server = FakeDnsServer::start(FakeZone::default().with_ipv6("v6.example.test")).await;
    let executor = QueryExecutor::new(transport(), RetryPolicy::standard()).with_port(server.port());
    let endpoint = ResolverEndpoint::new("127.0.0.1", Arc::from("Loopback"));

    let found = executor.query(&normalize_domain("v6.example.test").unwrap(), &endpoint).await;
    let not_found = executor.query(&normalize_domain("v4only.example.test").unwrap(), &endpoint).await;

    assert_eq!(found, QueryOutcome::Found);
    assert_eq!(not_found, QueryOutcome::NotFound);
}

#[tokio::test]
async fn test_nxdomain_is_rejected() {
    let server = FakeDnsServer::start(FakeZone::default().with_nxdomain("gone.example.test")).await;
    let executor = QueryExecutor::new(transport(), RetryPolicy::standard()).with_port(server.port());
    let endpoint = ResolverEndpoint::new("127.0.0.1", Arc::from("Loopback"));

    let outcome = executor.query(&normalize_domain("gone.example.test").unwrap(), &endpoint).await;

    assert_eq!(
        outcome,
        QueryOutcome::Rejected {
            rcode: u16::from(ResponseCode::NXDomain)
        }
    );
}

#[tokio::test]
async fn test_truncated_udp_answer_falls_back_to_tcp() {
    let server = FakeDnsServer::start(FakeZone::default().with_ipv6("big.example.test").truncating()).await;
    let query = build_aaaa_query(&normalize_domain("big.example.test").unwrap());

    let response = transport()
        .exchange(&query, &server.addr.to_string())
        .await
        .unwrap();

    assert!(!response.truncated());
    assert_eq!(response.id(), query.id());
    assert_eq!(response.answers().len(), 1);
}

#[tokio::test]
async fn test_idna_domain_is_queried_as_punycode() {
    let server = FakeDnsServer::start(FakeZone::default().with_ipv6("xn--bcher-kva.example")).await;
    let executor = Arc::new(QueryExecutor::new(transport(), RetryPolicy::standard()).with_port(server.port()));
    let scanner = DomainScanner::new(executor, registry(&[("Loopback", &["127.0.0.1"])]));
    let mut site = website("Bücher", &["bücher.example"]);

    scanner.scan(&mut site).await;

    assert_eq!(site.support_status(), SupportStatus::Full);
}
