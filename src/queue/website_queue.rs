// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};

use crate::domain::models::website::Website;

/// 队列错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// 所有消费者都已退出
    #[error("Queue closed")]
    Closed,
}

/// 排队中的网站，携带其在配置中的位置
#[derive(Debug)]
pub struct QueuedWebsite {
    pub index: usize,
    pub website: Website,
}

/// 有界先进先出网站队列
///
/// 容量只用作流水线缓冲，并发度由工作器数量决定
pub struct WebsiteQueue;

impl WebsiteQueue {
    /// 创建容量为 `capacity` 的队列（至少为 1）
    pub fn bounded(capacity: usize) -> (WebsiteSender, WebsiteReceiver) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (
            WebsiteSender { inner: sender },
            WebsiteReceiver {
                inner: Arc::new(Mutex::new(receiver)),
            },
        )
    }
}

/// 队列生产端，丢弃即关闭队列
pub struct WebsiteSender {
    inner: mpsc::Sender<QueuedWebsite>,
}

impl WebsiteSender {
    /// 入队，队列满时等待
    pub async fn enqueue(&self, index: usize, website: Website) -> Result<(), QueueError> {
        self.inner
            .send(QueuedWebsite { index, website })
            .await
            .map_err(|_| QueueError::Closed)
    }

    /// 关闭队列，消费端取完剩余元素后收到 `None`
    pub fn close(self) {
        drop(self);
    }
}

/// 队列消费端，可在多个工作器之间共享
#[derive(Clone)]
pub struct WebsiteReceiver {
    inner: Arc<Mutex<mpsc::Receiver<QueuedWebsite>>>,
}

impl WebsiteReceiver {
    /// 出队，队列关闭且为空时返回 `None`
    pub async fn dequeue(&self) -> Option<QueuedWebsite> {
        self.inner.lock().await.recv().await
    }
}
