mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    restcheck::logger::init_logger(cli.verbose);

    let all_passed = cli::run(cli).await?;
    if !all_passed {
        std::process::exit(1);
    }
    Ok(())
}
