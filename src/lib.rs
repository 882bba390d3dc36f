//! # ESG Report Processor
//!
//! 把 ESG 永續報告書 PDF 轉成結構化 Excel 的處理管線：
//!
//! 1. 上傳 PDF 到文件解析服務（LlamaParse），取得 job_id
//! 2. 輪詢任務狀態直到完成、失敗或超時
//! 3. 取回逐頁解析結果（文字與表格項目）
//! 4. 逐頁清理文字並送 LLM 做結構化擷取（固定分類體系）
//! 5. 把累積的擷取結果送 LLM 做一次整合去重
//! 6. 去重、排序後寫入 Excel
//!
//! ## 模組結構
//!
//! - `clients/` - 外部服務客戶端（解析服務、LLM）
//! - `models/` - wire 類型與擷取結果的資料模型
//! - `services/` - 擷取、分析、Excel 輸出能力
//! - `processor` - 端到端流程編排
//!
//! ## 失敗策略
//!
//! 設定、輸入檔案、上傳、輪詢、取結果與寫檔的失敗會中止整次執行
//! （進程退出碼 1）；單頁分析與結果整合的失敗只記錄並降級
//! （空列表 / 未整合的列表），不會中止執行。

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod processor;
pub mod prompts;
pub mod services;

// 重新導出常用類型
pub use config::Config;
pub use error::{ProcessError, Result};
pub use models::{Chapter, JobStatus, ParseResult, Record, Source};
pub use processor::EsgReportProcessor;
