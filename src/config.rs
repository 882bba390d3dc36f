use crate::error::{ProcessError, Result};

/// 程式配置
///
/// 兩組 API 金鑰為必填，缺少任一個會在任何網路呼叫之前以
/// [`ProcessError::Config`] 中止；其餘欄位皆有預設值，可用環境變數覆寫。
#[derive(Clone, Debug)]
pub struct Config {
    /// LlamaParse API 金鑰（`LLAMA_PARSE_API_KEY`）
    pub llama_api_key: String,
    /// OpenAI API 金鑰（`OPENAI_API_KEY`）
    pub openai_api_key: String,
    /// LlamaParse API 基礎 URL
    pub llama_base_url: String,
    /// LLM 模型名稱
    pub llm_model_name: String,
    /// 任務狀態輪詢間隔（秒）
    pub poll_interval_secs: u64,
    /// 等待解析完成的時間上限（秒）
    pub poll_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llama_api_key: String::new(),
            openai_api_key: String::new(),
            llama_base_url: "https://api.cloud.llamaindex.ai/api/parsing".to_string(),
            llm_model_name: "gpt-4o".to_string(),
            poll_interval_secs: 5,
            poll_timeout_secs: 300,
        }
    }
}

impl Config {
    /// 從環境變數載入配置
    pub fn from_env() -> Result<Self> {
        let default = Self::default();
        Ok(Self {
            llama_api_key: require_env("LLAMA_PARSE_API_KEY")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            llama_base_url: std::env::var("LLAMA_PARSE_BASE_URL")
                .unwrap_or(default.llama_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            poll_interval_secs: std::env::var("POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.poll_interval_secs),
            poll_timeout_secs: std::env::var("POLL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.poll_timeout_secs),
        })
    }
}

/// 讀取必要的環境變數，不存在時返回配置錯誤
pub fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ProcessError::Config {
            name: name.to_string(),
        })
}
