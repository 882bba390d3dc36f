//! LLM API 客戶端
//!
//! 封裝 chat-completion 呼叫：固定 temperature 0、強制 JSON object
//! 輸出。使用 `async-openai`，兼容 OpenAI API 的服務。

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ProcessError, Result};

/// LLM 客戶端
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmClient {
    /// 建立新的 LLM 客戶端
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new().with_api_key(&config.openai_api_key);
        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 發送一次要求 JSON 輸出的聊天請求
    ///
    /// # 參數
    /// - `system_message`: 系統提示（固定分類體系）
    /// - `user_message`: 使用者訊息（頁面內容或整合 payload）
    ///
    /// # 返回
    /// 返回 LLM 回覆的原始字串（已 trim），由呼叫端解析 JSON。
    pub async fn chat_json(&self, system_message: &str, user_message: &str) -> Result<String> {
        debug!("調用 LLM API，模型: {}", self.model_name);
        debug!("用戶訊息長度: {} 字符", user_message.len());

        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_message)
                    .build()?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_message)
                    .build()?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.0)
            .response_format(ResponseFormat::JsonObject)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|err| {
            warn!("LLM API 調用失敗: {}", err);
            ProcessError::from(err)
        })?;

        debug!("LLM API 調用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| ProcessError::Extraction {
                reason: format!("LLM 返回內容為空 (模型: {})", self.model_name),
            })?;

        Ok(content.trim().to_string())
    }
}
