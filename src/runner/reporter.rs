use crate::runner::types::{Outcome, RunSummary, TestResult};
use colored::Colorize;

pub struct TestReporter {
    verbose: u8,
}

impl TestReporter {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    /// 打印序列开始
    pub fn print_header(&self, sequence_name: &str, total: usize) {
        println!(
            "\nRunning {} descriptors from {}...\n",
            total,
            sequence_name.bold()
        );
    }

    /// 打印单个结果
    pub fn print_result(&self, result: &TestResult) {
        // 纯等待
        if result.waited {
            let name_part = if let Some(ref name) = result.name {
                format!(" {} -", name)
            } else {
                String::new()
            };
            println!(
                " {} [{}]{} waited {}ms",
                "⊘".dimmed(),
                result.index,
                name_part,
                result.duration.as_millis()
            );
            return;
        }

        let symbol = if result.passed() { "✓" } else { "✗" };
        let color = if result.passed() { "green" } else { "red" };

        let name_part = if let Some(ref name) = result.name {
            format!(" {} -", name)
        } else {
            String::new()
        };

        println!(
            " {} [{}]{} {} {} ({}ms)",
            symbol.color(color),
            result.index,
            name_part,
            result.method.cyan(),
            result.url,
            result.duration.as_millis()
        );

        match &result.outcome {
            Outcome::Passed => {}
            Outcome::Failed(reason) => {
                println!("   {}: {}", "Failed".red().bold(), reason);
            }
            Outcome::Error(cause) => {
                println!("   {}: {}", "Error".red().bold(), cause);
            }
        }

        // verbose 模式或失败时显示响应详情
        if (self.verbose >= 1 || !result.passed()) && result.response.is_some() {
            let response = result.response.as_ref().expect("checked above");
            println!(
                "   -> {} {}",
                response.status.code(),
                response.effective_content_type().dimmed()
            );
            if self.verbose >= 2 || !result.passed() {
                for line in response.body.lines() {
                    println!("   {}", line);
                }
            }
            println!();
        }
    }

    /// 打印汇总
    pub fn print_summary(&self, summary: &RunSummary) {
        println!("\n{}", "━".repeat(50));
        println!("{}", "Summary".bold());
        println!("{}", "━".repeat(50));

        if summary.all_passed() {
            println!(
                "  {}: {} passed, {} total",
                "Descriptors".bold(),
                summary.passed.to_string().green(),
                summary.total
            );
        } else {
            println!(
                "  {}: {} passed, {} failed, {} errors, {} total",
                "Descriptors".bold(),
                summary.passed.to_string().green(),
                summary.failed.to_string().red(),
                summary.errors.to_string().red(),
                summary.total
            );
        }

        println!(
            "  {}: {:.3}s",
            "Duration".bold(),
            summary.total_duration.as_secs_f64()
        );
        println!();
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new(0)
    }
}
