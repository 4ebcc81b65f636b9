// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

use super::scripted_transport::answer;

/// 本地回环上的最小 DNS 服务器
///
/// `ipv6_hosts` 中的名称返回 AAAA，`nxdomain_hosts` 中的名称返回 NXDOMAIN，
/// 其余名称返回空的 NOERROR。`truncate_udp` 为真时 UDP 应答只带 TC 标志，
/// 完整应答只能通过同端口的 TCP 获得。
pub struct FakeDnsServer {
    pub addr: SocketAddr,
    handles: Vec<JoinHandle<()>>,
}

#[derive(Default)]
pub struct FakeZone {
    pub ipv6_hosts: HashSet<String>,
    pub nxdomain_hosts: HashSet<String>,
    pub truncate_udp: bool,
}

impl FakeZone {
    pub fn with_ipv6(mut self, host: &str) -> Self {
        self.ipv6_hosts.insert(fqdn(host));
        self
    }

    pub fn with_nxdomain(mut self, host: &str) -> Self {
        self.nxdomain_hosts.insert(fqdn(host));
        self
    }

    pub fn truncating(mut self) -> Self {
        self.truncate_udp = true;
        self
    }

    fn respond(&self, query: &Message) -> Message {
        let name = query
            .queries()
            .first()
            .map(|q| q.name().to_ascii().to_lowercase())
            .unwrap_or_default();

        if self.nxdomain_hosts.contains(&name) {
            answer(query, ResponseCode::NXDomain, false)
        } else {
            answer(query, ResponseCode::NoError, self.ipv6_hosts.contains(&name))
        }
    }
}

fn fqdn(host: &str) -> String {
    format!("{}.", host.trim_end_matches('.').to_lowercase())
}

impl FakeDnsServer {
    /// 在 127.0.0.1 的随机端口上启动，UDP 与 TCP 共用端口
    pub async fn start(zone: FakeZone) -> Self {
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = tcp.local_addr().unwrap();
        let udp = UdpSocket::bind(addr).await.unwrap();
        let zone = Arc::new(zone);

        let udp_zone = zone.clone();
        let udp_handle = tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                let Ok((len, peer)) = udp.recv_from(&mut buf).await else {
                    return;
                };
                let Ok(query) = Message::from_bytes(&buf[..len]) else {
                    continue;
                };

                let mut response = udp_zone.respond(&query);
                if udp_zone.truncate_udp {
                    response.take_answers();
                    response.set_truncated(true);
                }
                let _ = udp.send_to(&response.to_bytes().unwrap(), peer).await;
            }
        });

        let tcp_handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = tcp.accept().await else {
                    return;
                };
                let zone = zone.clone();
                tokio::spawn(async move {
                    let mut length = [0u8; 2];
                    if stream.read_exact(&mut length).await.is_err() {
                        return;
                    }
                    let mut buf = vec![0u8; u16::from_be_bytes(length) as usize];
                    if stream.read_exact(&mut buf).await.is_err() {
                        return;
                    }
                    let Ok(query) = Message::from_bytes(&buf) else {
                        return;
                    };

                    let bytes = zone.respond(&query).to_bytes().unwrap();
                    let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                    let _ = stream.write_all(&bytes).await;
                });
            }
        });

        Self {
            addr,
            handles: vec![udp_handle, tcp_handle],
        }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

impl Drop for FakeDnsServer {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
