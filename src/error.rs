//! 錯誤類型定義
//!
//! 每個外部呼叫點都把廠商錯誤映射到這裡的分類：
//! - 設定與輸入檔案錯誤在任何網路呼叫之前就會中止
//! - 上傳 / 取結果 / 寫檔的失敗會中止整次執行
//! - LLM 分析與整合的失敗屬於 `Extraction`，由呼叫端吸收，不會中止執行

use thiserror::Error;

/// 應用程式錯誤類型
#[derive(Debug, Error)]
pub enum ProcessError {
    /// 缺少必要的環境變數
    #[error("缺少必要的環境變數: {name}")]
    Config { name: String },

    /// 找不到輸入的 PDF 文件
    #[error("找不到 PDF 文件: {path}")]
    NotFound { path: String },

    /// 網路請求失敗或 API 返回非 2xx 響應
    #[error("API 請求失敗 ({endpoint}): {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 等待解析超過時間上限
    #[error("等待解析超時（上限 {timeout_secs} 秒）")]
    Timeout { timeout_secs: u64 },

    /// 解析服務回報任務失敗
    #[error("解析任務失敗: {reason}")]
    JobFailed { reason: String },

    /// LLM 呼叫或 JSON 解析失敗（逐頁 / 整合時由呼叫端吸收）
    #[error("內容擷取失敗: {reason}")]
    Extraction { reason: String },

    /// 寫入 Excel 失敗
    #[error("寫入 Excel 失敗: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// 檔案操作失敗
    #[error("檔案操作失敗: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ProcessError {
    fn from(err: serde_json::Error) -> Self {
        ProcessError::Extraction {
            reason: format!("JSON 解析錯誤: {}", err),
        }
    }
}

impl From<async_openai::error::OpenAIError> for ProcessError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        ProcessError::Extraction {
            reason: format!("LLM API 呼叫失敗: {}", err),
        }
    }
}

/// 應用程式結果類型
pub type Result<T> = std::result::Result<T, ProcessError>;
