//! 解析結果結構瀏覽工具
//!
//! 對已完成的解析任務取回原始 JSON，保存完整結果到檔案，並把
//! 每頁的文字片段與表格內容印到終端，方便在不跑整條管線的情況
//! 下檢查解析服務的輸出結構。只需要 `LLAMA_PARSE_API_KEY`。
//!
//! 用法：
//! ```bash
//! cargo run --bin inspect_job -- --job-id <JOB_ID>
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use esg_report_processor::clients::ParseClient;
use esg_report_processor::config::{require_env, Config};
use esg_report_processor::logger;
use esg_report_processor::models::parse::{PageItem, ParseResult};

#[derive(Debug, Parser)]
#[command(name = "inspect_job", about = "瀏覽解析任務的結果結構")]
struct Cli {
    /// 要檢查的任務 ID
    #[arg(long)]
    job_id: String,

    /// 完整 JSON 結果的保存路徑
    #[arg(long, default_value = "llama_output.json")]
    save: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();

    let cli = Cli::parse();

    // 只需要解析服務的金鑰
    let config = Config {
        llama_api_key: require_env("LLAMA_PARSE_API_KEY")?,
        ..Config::default()
    };

    let client = ParseClient::new(&config);
    let raw = client.get_result_raw(&cli.job_id).await?;

    // 保存完整的 JSON 結果
    std::fs::write(&cli.save, serde_json::to_string_pretty(&raw)?)?;
    info!("已保存完整的 JSON 結果到 {}", cli.save.display());

    // 統計資訊
    let result: ParseResult = serde_json::from_value(raw.clone())?;
    let total_items: usize = result.pages.iter().map(|page| page.items.len()).sum();
    info!("總頁數: {}，總項目數: {}", result.pages.len(), total_items);

    if let Some(first_page) = raw.get("pages").and_then(|p| p.get(0)) {
        if let Some(fields) = first_page.as_object() {
            let names: Vec<&str> = fields.keys().map(String::as_str).collect();
            info!("第一頁可用欄位: {}", names.join(", "));
        }
    }

    // 逐頁顯示結構
    println!("\n=== JSON 結構分析 ===");
    for page in &result.pages {
        println!("\n第 {} 頁:", page.page);
        for item in &page.items {
            match item {
                PageItem::Text { value } => {
                    println!("\n文字內容片段:");
                    println!("{}", snippet(value, 200));
                    println!("{}", "-".repeat(50));
                }
                PageItem::Table { value } => {
                    println!("\n表格內容:");
                    println!("{}", serde_json::to_string_pretty(value)?);
                    println!("{}", "-".repeat(50));
                }
                PageItem::Other => {}
            }
        }
    }

    Ok(())
}

/// 截斷長文字，超過上限補上省略號
fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        text.chars().take(max_chars).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
