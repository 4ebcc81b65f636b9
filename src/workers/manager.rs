// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use futures::future::join_all;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use crate::domain::models::website::Website;
use crate::engines::traits::DnsTransport;
use crate::queue::website_queue::WebsiteQueue;
use crate::utils::errors::WorkerError;
use crate::workers::domain_scanner::DomainScanner;
use crate::workers::resolver_worker::ResolverWorker;

/// 默认工作器数量
pub const DEFAULT_WORKER_COUNT: usize = 30;

/// 默认队列容量系数（容量 = 系数 × 工作器数量）
pub const DEFAULT_QUEUE_FACTOR: usize = 2;

/// 工作管理器
///
/// 固定数量的工作器共同消费一个有界队列，所有工作器结束后才返回结果
pub struct WorkerManager<T: DnsTransport + 'static> {
    scanner: Arc<DomainScanner<T>>,
    worker_count: usize,
    queue_capacity: usize,
}

impl<T: DnsTransport + 'static> WorkerManager<T> {
    pub fn new(scanner: DomainScanner<T>, worker_count: usize, queue_factor: usize) -> Self {
        let worker_count = worker_count.max(1);
        Self {
            scanner: Arc::new(scanner),
            worker_count,
            queue_capacity: worker_count.saturating_mul(queue_factor.max(1)),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// 检查所有网站
    ///
    /// 阻塞直到每个工作器都观察到队列关闭并退出。
    /// 返回的网站保持传入时的顺序。
    pub async fn check_all(&self, websites: Vec<Website>) -> Result<Vec<Website>, WorkerError> {
        info!(websites = websites.len(), workers = self.worker_count, "Testing websites");

        let expected = websites.len();
        let (sender, receiver) = WebsiteQueue::bounded(self.queue_capacity);

        let mut handles = Vec::with_capacity(self.worker_count);
        for worker_id in 0..self.worker_count {
            let worker = ResolverWorker::new(worker_id, self.scanner.clone());
            let receiver = receiver.clone();
            handles.push(tokio::spawn(worker.run(receiver)));
            info!(worker_id, "Started resolver worker");
        }
        drop(receiver);

        for (index, website) in websites.into_iter().enumerate() {
            if sender.enqueue(index, website).await.is_err() {
                error!("All resolver workers exited before the queue was filled");
                return Err(WorkerError::QueueClosed);
            }
        }
        sender.close();
        info!("Finished queuing up websites");

        let mut finished = Vec::with_capacity(expected);
        for joined in join_all(handles).await {
            match joined {
                Ok(mut batch) => finished.append(&mut batch),
                Err(e) => {
                    error!(error = %e, "Resolver worker terminated abnormally");
                    return Err(WorkerError::Panicked(e.to_string()));
                }
            }
        }
        info!("Workers finished their tasks");

        if finished.len() != expected {
            return Err(WorkerError::InternalError(format!(
                "expected {} checked websites, got {}",
                expected,
                finished.len()
            )));
        }

        finished.sort_by_key(|queued| queued.index);
        Ok(finished.into_iter().map(|queued| queued.website).collect())
    }
}

/// 监听 Ctrl-C 并广播关闭信号
///
/// 收到信号后正在进行的扫描会把剩余端点标记为未检查
pub fn spawn_shutdown_listener() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);

    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received, cancelling outstanding queries");
                let _ = tx.send(true);
            }
            Err(err) => error!("Unable to listen for shutdown signal: {}", err),
        }
        // Keep the sender alive so receivers never observe a closed channel
        tx.closed().await;
    });

    rx
}
