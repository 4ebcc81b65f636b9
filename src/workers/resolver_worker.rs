// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, histogram};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

use crate::engines::traits::DnsTransport;
use crate::queue::website_queue::{QueuedWebsite, WebsiteReceiver};
use crate::workers::domain_scanner::DomainScanner;

/// 解析工作器
///
/// 每次从队列取出一个网站，在本工作器内顺序完成扫描和分类，然后取下一个
pub struct ResolverWorker<T: DnsTransport> {
    worker_id: usize,
    scanner: Arc<DomainScanner<T>>,
}

impl<T: DnsTransport> ResolverWorker<T> {
    pub fn new(worker_id: usize, scanner: Arc<DomainScanner<T>>) -> Self {
        Self { worker_id, scanner }
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    /// 运行工作器直到队列关闭且取空，返回本工作器处理过的网站
    #[instrument(skip(self, receiver), fields(worker_id = self.worker_id))]
    pub async fn run(self, receiver: WebsiteReceiver) -> Vec<QueuedWebsite> {
        debug!("Resolver worker started");
        let mut finished = Vec::new();

        while let Some(QueuedWebsite { index, mut website }) = receiver.dequeue().await {
            let started = Instant::now();

            self.scanner.scan(&mut website).await;

            let elapsed = started.elapsed();
            website.set_check_duration(elapsed);
            histogram!("website_check_duration_seconds").record(elapsed.as_secs_f64());
            counter!("websites_checked_total", "status" => website.support_status().to_string()).increment(1);

            info!(
                website = %website.name,
                status = %website.support_status(),
                duration_secs = elapsed.as_secs_f64(),
                "Finished checking website"
            );

            finished.push(QueuedWebsite { index, website });
        }

        debug!(processed = finished.len(), "Queue drained, resolver worker stopping");
        finished
    }
}
