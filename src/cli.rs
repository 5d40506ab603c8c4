use clap::Parser;

use restcheck::config::ConfigLoader;
use restcheck::runner::{RunSummary, SequenceRunner, TestReporter};
use restcheck::suite;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 测试文件或目录（.json 序列文件）
    pub path: String,

    /// 目标服务器地址（也可在 restcheck.toml 中配置）
    #[arg(short, long)]
    pub server: Option<String>,

    /// 默认超时（毫秒）
    #[arg(long)]
    pub timeout: Option<u64>,

    /// 输出详细程度（-v 显示响应概要，-vv 显示响应体）
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// 加载、执行、报告；返回是否全部通过
pub async fn run(cli: Cli) -> anyhow::Result<bool> {
    let defaults = ConfigLoader::find_and_load();
    let config = ConfigLoader::build_config(cli.server, cli.timeout, cli.verbose, defaults)
        .map_err(|e| anyhow::anyhow!(e))?;

    let sequences = suite::load_path(&cli.path)?;

    let runner = SequenceRunner::new(config.clone());
    let reporter = TestReporter::new(config.verbose);

    let mut reports = Vec::with_capacity(sequences.len());
    for sequence in &sequences {
        reporter.print_header(&sequence.name, sequence.len());
        let report = runner.run(sequence).await?;
        for result in &report.results {
            reporter.print_result(result);
        }
        reports.push(report);
    }

    let summary = RunSummary::from_reports(&reports);
    reporter.print_summary(&summary);

    Ok(summary.all_passed())
}
