use std::time::{Duration, Instant};

use crate::Result;
use crate::config::RunConfig;
use crate::http::Client;
use crate::runner::evaluator::evaluate;
use crate::runner::types::{SequenceReport, TestResult};
use crate::suite::{Descriptor, Sequence};

/// 序列运行器
///
/// 严格串行：第 i+1 个描述符在第 i 个的完整结局（请求 + 评估）
/// 出来之前不会开始。后面的描述符可能依赖前面写入的 cookie
/// 或服务端状态，这是正确性要求而不是性能取舍。
pub struct SequenceRunner {
    config: RunConfig,
}

impl SequenceRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// 执行一个序列
    ///
    /// 每个序列一个全新的 Client（即全新的 cookie jar），
    /// 失败不中断：所有描述符都会执行，结果逐个累积
    pub async fn run(&self, sequence: &Sequence) -> Result<SequenceReport> {
        let client = Client::new(self.config.default_timeout)?;
        let mut results = Vec::with_capacity(sequence.len());

        for (index, descriptor) in sequence.descriptors.iter().enumerate() {
            let result = self.execute_one(&client, descriptor, index + 1).await;
            results.push(result);
        }

        Ok(SequenceReport::new(&sequence.name, results))
    }

    /// 依次执行多个独立序列
    pub async fn run_all(&self, sequences: &[Sequence]) -> Result<Vec<SequenceReport>> {
        let mut reports = Vec::with_capacity(sequences.len());
        for sequence in sequences {
            reports.push(self.run(sequence).await?);
        }
        Ok(reports)
    }

    /// 执行单个描述符
    async fn execute_one(
        &self,
        client: &Client,
        descriptor: &Descriptor,
        index: usize,
    ) -> TestResult {
        let start = Instant::now();

        // 纯等待描述符：只休眠，不发请求，跳过所有检查
        if let Some(wait) = descriptor.wait_millis {
            tracing::debug!("waiting {} ms", wait);
            tokio::time::sleep(Duration::from_millis(wait)).await;
            return TestResult::waited(index, descriptor.name.clone(), start.elapsed());
        }

        match client.dispatch(descriptor, &self.config.server).await {
            Ok(response) => {
                let outcome = evaluate(descriptor, &response);
                TestResult::completed(index, descriptor, outcome, response)
            }
            Err(e) => TestResult::error(index, descriptor, e.to_string(), start.elapsed()),
        }
    }
}
