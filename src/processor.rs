//! 流程編排
//!
//! 把整條管線串起來：上傳 → 輪詢 → 取結果 → 逐頁分析 → 整合 →
//! 寫入 Excel。頁面嚴格依序處理，沒有並發扇出；分析與整合的失敗
//! 由下層吸收，上傳、輪詢、取結果與寫檔的失敗中止整次執行。

use std::path::Path;

use tracing::info;

use crate::clients::ParseClient;
use crate::config::Config;
use crate::error::Result;
use crate::services::report_writer::{save_to_excel, ReportStats};
use crate::services::{extractor, EsgAnalyzer};

/// ESG 報告處理器
pub struct EsgReportProcessor {
    parse_client: ParseClient,
    analyzer: EsgAnalyzer,
}

impl EsgReportProcessor {
    /// 以配置建立處理器（每次執行各建一個實例，沒有全域狀態）
    pub fn new(config: &Config) -> Self {
        Self {
            parse_client: ParseClient::new(config),
            analyzer: EsgAnalyzer::new(config),
        }
    }

    /// 處理一份 ESG 報告
    ///
    /// # 參數
    /// - `pdf_path`: PDF 報告的路徑
    /// - `output_path`: Excel 輸出的路徑
    pub async fn process_report(&self, pdf_path: &Path, output_path: &Path) -> Result<ReportStats> {
        // 1. 上傳 PDF
        let job_id = self.parse_client.upload_pdf(pdf_path).await?;

        // 2. 等待解析完成
        self.parse_client.wait_for_completion(&job_id).await?;

        // 3. 取回逐頁解析結果
        let result = self.parse_client.get_result(&job_id).await?;
        info!("開始處理內容，總頁數: {}", result.pages.len());

        // 4. 逐頁擷取文字並送 LLM 分析，嚴格依序
        let mut all_records = Vec::new();
        for (page_num, text) in extractor::page_text_blocks(&result) {
            info!("處理第 {} 頁", page_num);
            let records = self.analyzer.analyze_page(&text, page_num).await;
            all_records.extend(records);
        }

        info!("內容處理完成，開始整合結果");

        // 5. 整合所有結果（失敗時保留未整合的列表）
        let integrated = self.analyzer.integrate_results(all_records).await;

        // 6. 寫入 Excel
        let stats = save_to_excel(integrated, output_path)?;

        info!(
            "處理完成（{}），結果已保存到: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            output_path.display()
        );

        Ok(stats)
    }
}
