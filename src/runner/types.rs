use std::time::Duration;

use crate::http::Response;
use crate::suite::Descriptor;

/// 单个描述符的结局分类
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 所有检查通过
    Passed,
    /// 期望不满足（状态码 / content-type / 响应体）
    Failed(String),
    /// 传输层或本地错误（超时、连接失败、读文件失败、JSON 解析失败）
    Error(String),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }
}

/// 单个描述符的执行结果
#[derive(Debug, Clone)]
pub struct TestResult {
    /// 描述符序号（从 1 开始）
    pub index: usize,

    /// 描述符名称（如果有）
    pub name: Option<String>,

    /// HTTP 方法
    pub method: String,

    /// 请求路径
    pub url: String,

    /// 响应状态码（拿到响应时）
    pub status: Option<u16>,

    /// 执行耗时
    pub duration: Duration,

    /// 结局
    pub outcome: Outcome,

    /// 完整响应（用于失败诊断和详细输出）
    pub response: Option<Response>,

    /// 是否是纯等待描述符
    pub waited: bool,
}

impl TestResult {
    /// 发出请求并完成评估后的结果
    pub fn completed(
        index: usize,
        descriptor: &Descriptor,
        outcome: Outcome,
        response: Response,
    ) -> Self {
        Self {
            index,
            name: descriptor.name.clone(),
            method: descriptor.method.to_string(),
            url: descriptor.url.clone(),
            status: Some(response.status.code()),
            duration: response.duration,
            outcome,
            response: Some(response),
            waited: false,
        }
    }

    /// 传输或本地错误，没有可评估的响应
    pub fn error(index: usize, descriptor: &Descriptor, cause: String, duration: Duration) -> Self {
        Self {
            index,
            name: descriptor.name.clone(),
            method: descriptor.method.to_string(),
            url: descriptor.url.clone(),
            status: None,
            duration,
            outcome: Outcome::Error(cause),
            response: None,
            waited: false,
        }
    }

    /// 纯等待描述符：立即视为通过，不做任何检查
    pub fn waited(index: usize, name: Option<String>, duration: Duration) -> Self {
        Self {
            index,
            name,
            method: "WAIT".to_string(),
            url: String::new(),
            status: None,
            duration,
            outcome: Outcome::Passed,
            response: None,
            waited: true,
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome.is_passed()
    }
}

/// 一个序列的全部结果
#[derive(Debug, Clone)]
pub struct SequenceReport {
    pub name: String,
    pub results: Vec<TestResult>,
}

impl SequenceReport {
    pub fn new(name: impl Into<String>, results: Vec<TestResult>) -> Self {
        Self {
            name: name.into(),
            results,
        }
    }

    /// 整体成功当且仅当每个结局都是 Passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed())
    }

    /// 第一个未通过的结果
    pub fn first_problem(&self) -> Option<&TestResult> {
        self.results.iter().find(|r| !r.passed())
    }
}

/// 跨序列的汇总
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub waited: usize,
    pub total_duration: Duration,
}

impl RunSummary {
    pub fn from_reports(reports: &[SequenceReport]) -> Self {
        let results = reports.iter().flat_map(|r| &r.results);

        let mut summary = Self {
            total: 0,
            passed: 0,
            failed: 0,
            errors: 0,
            waited: 0,
            total_duration: Duration::from_secs(0),
        };

        for result in results {
            summary.total += 1;
            summary.total_duration += result.duration;
            if result.waited {
                summary.waited += 1;
            }
            match &result.outcome {
                Outcome::Passed => summary.passed += 1,
                Outcome::Failed(_) => summary.failed += 1,
                Outcome::Error(_) => summary.errors += 1,
            }
        }

        summary
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(url: &str) -> Descriptor {
        Descriptor::from_value(&json!({"url": url})).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let desc = descriptor("/x");
        let results = vec![
            TestResult::waited(1, None, Duration::from_millis(50)),
            TestResult::error(
                2,
                &desc,
                "connection refused".to_string(),
                Duration::from_millis(100),
            ),
            TestResult::error(
                3,
                &desc,
                "timeout".to_string(),
                Duration::from_millis(200),
            ),
        ];
        let report = SequenceReport::new("seq", results);

        let summary = RunSummary::from_reports(std::slice::from_ref(&report));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.waited, 1);
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.total_duration, Duration::from_millis(350));
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_report_first_problem() {
        let desc = descriptor("/y");
        let results = vec![
            TestResult::waited(1, None, Duration::from_millis(1)),
            TestResult::error(2, &desc, "boom".to_string(), Duration::from_millis(1)),
        ];
        let report = SequenceReport::new("seq", results);

        assert!(!report.all_passed());
        assert_eq!(report.first_problem().unwrap().index, 2);
    }

    #[test]
    fn test_all_passed_when_empty() {
        let report = SequenceReport::new("empty", Vec::new());
        assert!(report.all_passed());
        assert!(report.first_problem().is_none());
    }
}
