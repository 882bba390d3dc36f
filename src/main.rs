use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use esg_report_processor::{logger, Config, EsgReportProcessor};

/// ESG 報告處理工具
///
/// 上傳 PDF 到解析服務、等待解析完成、用 LLM 做結構化擷取，
/// 最後輸出 Excel。
#[derive(Debug, Parser)]
#[command(name = "process_esg_report", about = "ESG 報告處理工具")]
struct Cli {
    /// PDF 報告的路徑
    #[arg(long)]
    pdf: PathBuf,

    /// Excel 輸出的路徑
    #[arg(long)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日誌
    logger::init();

    let cli = Cli::parse();

    // 載入配置（缺少 API 金鑰時在任何網路呼叫之前中止）
    let config = Config::from_env().inspect_err(|err| error!("{}", err))?;

    // 建立輸出目錄（如果不存在）
    if let Some(output_dir) = cli.output.parent() {
        if !output_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(output_dir)?;
        }
    }

    // 處理報告；失敗時記錄並以非零退出碼結束
    let processor = EsgReportProcessor::new(&config);
    if let Err(err) = processor.process_report(&cli.pdf, &cli.output).await {
        error!("處理過程中發生錯誤: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
