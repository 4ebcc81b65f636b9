// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;
use tracing::debug;

use crate::engines::traits::{DnsTransport, TransportError};

/// 默认单次查询超时
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// UDP 应答的最大长度
const MAX_UDP_MESSAGE_SIZE: usize = 4096;

/// UDP 传输，应答被截断时改用 TCP 重新交换
#[derive(Debug, Clone)]
pub struct UdpTransport {
    timeout: Duration,
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT)
    }
}

impl UdpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exchange_udp(&self, request: &[u8], expected_id: u16, addr: SocketAddr) -> Result<Message, TransportError> {
        let bind_addr: SocketAddr = if addr.is_ipv6() {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(addr).await?;
        socket.send(request).await?;

        let mut buf = vec![0u8; MAX_UDP_MESSAGE_SIZE];
        loop {
            let len = socket.recv(&mut buf).await?;
            let response = Message::from_bytes(&buf[..len])?;
            if response.id() == expected_id {
                return Ok(response);
            }
            // Stray datagram, keep waiting until the timeout fires
            debug!(expected_id, received_id = response.id(), "Discarding response with foreign id");
        }
    }

    async fn exchange_tcp(&self, request: &[u8], expected_id: u16, addr: SocketAddr) -> Result<Message, TransportError> {
        let length = u16::try_from(request.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "query exceeds 65535 bytes"))?;

        let mut stream = TcpStream::connect(addr).await?;
        stream.write_all(&length.to_be_bytes()).await?;
        stream.write_all(request).await?;

        let mut length_buf = [0u8; 2];
        stream.read_exact(&mut length_buf).await?;
        let mut buf = vec![0u8; u16::from_be_bytes(length_buf) as usize];
        stream.read_exact(&mut buf).await?;

        let response = Message::from_bytes(&buf)?;
        if response.id() != expected_id {
            return Err(TransportError::IdMismatch {
                expected: expected_id,
                received: response.id(),
            });
        }
        Ok(response)
    }
}

/// 将 `address:port` 解析为套接字地址
pub async fn resolve_target(target: &str) -> Result<SocketAddr, TransportError> {
    if let Ok(addr) = target.parse::<SocketAddr>() {
        return Ok(addr);
    }

    tokio::net::lookup_host(target)
        .await
        .map_err(|_| TransportError::NoAddress(target.to_string()))?
        .next()
        .ok_or_else(|| TransportError::NoAddress(target.to_string()))
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(&self, query: &Message, target: &str) -> Result<Message, TransportError> {
        let addr = resolve_target(target).await?;
        let request = query.to_bytes()?;

        let response = timeout(self.timeout, self.exchange_udp(&request, query.id(), addr))
            .await
            .map_err(|_| TransportError::Timeout)??;

        if !response.truncated() {
            return Ok(response);
        }

        debug!(target, "UDP response truncated, retrying over TCP");
        timeout(self.timeout, self.exchange_tcp(&request, query.id(), addr))
            .await
            .map_err(|_| TransportError::Timeout)?
    }

    fn name(&self) -> &'static str {
        "udp"
    }
}
