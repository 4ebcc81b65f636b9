// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::ProtoError;
use std::sync::Arc;
use thiserror::Error;

/// 传输错误类型
///
/// 收到带失败响应码的应答不属于传输错误
#[derive(Error, Debug)]
pub enum TransportError {
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 网络 I/O 错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 报文编码或解码失败
    #[error("Protocol error: {0}")]
    Proto(#[from] ProtoError),
    /// 应答 ID 与请求不匹配
    #[error("Response id {received} does not match query id {expected}")]
    IdMismatch { expected: u16, received: u16 },
    /// 目标地址无法解析
    #[error("Unresolvable target: {0}")]
    NoAddress(String),
}

impl TransportError {
    /// 判断错误是否可重试
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Timeout
            | TransportError::Io(_)
            | TransportError::Proto(_)
            | TransportError::IdMismatch { .. } => true,
            // 配置中的地址本身有问题，重试没有意义
            TransportError::NoAddress(_) => false,
        }
    }
}

/// DNS 传输特质
///
/// 把一条查询报文发送到 `target`（`address:port` 形式）并返回应答报文
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// 交换一次报文
    async fn exchange(&self, query: &Message, target: &str) -> Result<Message, TransportError>;

    /// 传输名称
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: DnsTransport + ?Sized> DnsTransport for Arc<T> {
    async fn exchange(&self, query: &Message, target: &str) -> Result<Message, TransportError> {
        (**self).exchange(query, target).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
