// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};
use metrics::counter;
use tokio::time::sleep;
use tracing::{debug, error};

use crate::domain::models::resolver::{ResolverEndpoint, DNS_PORT};
use crate::domain::models::website::QueryOutcome;
use crate::engines::traits::DnsTransport;
use crate::utils::errors::DomainNameError;
use crate::utils::retry_policy::RetryPolicy;
use crate::utils::url_utils::{to_ascii_domain, to_fqdn};

/// 查询执行器
///
/// 针对一个解析器端点执行一次 AAAA 查询，传输失败时按线性退避重试。
/// 收到带失败响应码的应答被视为权威结果，不会重试。
pub struct QueryExecutor<T: DnsTransport> {
    transport: T,
    policy: RetryPolicy,
    port: u16,
}

impl<T: DnsTransport> QueryExecutor<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self {
            transport,
            policy,
            port: DNS_PORT,
        }
    }

    /// 覆盖目标端口（默认 53）
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// 查询 `name` 在 `endpoint` 上是否存在 AAAA 记录
    pub async fn query(&self, name: &Name, endpoint: &ResolverEndpoint) -> QueryOutcome {
        let target = endpoint.target(self.port);
        let mut attempt = 0;
        let mut tries = 0;

        while self.policy.should_retry(attempt) {
            // First attempt is undelayed, later ones back off linearly
            let backoff = self.policy.calculate_backoff(attempt);
            if !backoff.is_zero() {
                sleep(backoff).await;
            }

            debug!(resolver = %endpoint.address(), domain = %name, attempt, "Sending query");
            counter!("dns_queries_total").increment(1);
            tries += 1;

            let query = build_aaaa_query(name);
            match self.transport.exchange(&query, &target).await {
                Err(e) => {
                    counter!("dns_query_transport_errors_total").increment(1);
                    debug!(resolver = %endpoint.address(), domain = %name, attempt, error = %e, "Failed to query resolver");
                    if !e.is_retryable() {
                        break;
                    }
                }
                Ok(response) if response.response_code() == ResponseCode::NoError => {
                    return if contains_aaaa(&response) {
                        debug!(resolver = %endpoint.address(), domain = %name, "Domain resolved to AAAA record");
                        QueryOutcome::Found
                    } else {
                        debug!(resolver = %endpoint.address(), domain = %name, "Domain did not resolve to AAAA record");
                        QueryOutcome::NotFound
                    };
                }
                Ok(response) => {
                    let rcode = response.response_code();
                    counter!("dns_query_rejections_total").increment(1);
                    error!(
                        resolver = %endpoint.address(),
                        domain = %name,
                        rcode = %rcode,
                        "No transport error occurred but DNS answer wasn't successful. Is the domain still active?"
                    );
                    return QueryOutcome::Rejected {
                        rcode: u16::from(rcode),
                    };
                }
            }

            attempt += 1;
        }

        counter!("dns_query_give_ups_total").increment(1);
        error!(
            resolver = %endpoint.address(),
            domain = %name,
            tries,
            "Giving up resolving domain"
        );
        QueryOutcome::GaveUp
    }
}

/// 将配置中的域名规范化为可查询的完全限定名称
pub fn normalize_domain(domain: &str) -> Result<Name, DomainNameError> {
    let ascii = to_ascii_domain(domain)?;
    Name::from_ascii(to_fqdn(&ascii)).map_err(|e| DomainNameError::InvalidName {
        domain: domain.to_string(),
        reason: e.to_string(),
    })
}

/// 构建递归 AAAA 查询报文
pub fn build_aaaa_query(name: &Name) -> Message {
    let mut message = Message::new();
    message
        .set_id(rand::random::<u16>())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(name.clone(), RecordType::AAAA));
    message
}

/// 应答区是否包含至少一条 AAAA 记录（CNAME 等其他记录被忽略）
pub fn contains_aaaa(response: &Message) -> bool {
    response
        .answers()
        .iter()
        .any(|record| record.record_type() == RecordType::AAAA)
}
