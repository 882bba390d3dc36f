//! 語意分析服務
//!
//! 兩種 LLM 呼叫：逐頁分析（analyze_page）與最後的結果整合
//! （integrate_results）。兩者的失敗策略不同但都不致命：
//! - 單頁分析失敗 → 該頁返回空列表，其他頁不受影響
//! - 整合失敗 → 原封不動返回未整合的列表
//!
//! 回應解析抽成純函數，方便在不打 API 的情況下測試。

use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::clients::LlmClient;
use crate::config::Config;
use crate::error::{ProcessError, Result};
use crate::models::record::{validate_items, Record};
use crate::prompts;

/// ESG 內容分析器
pub struct EsgAnalyzer {
    llm: LlmClient,
}

impl EsgAnalyzer {
    /// 建立新的分析器
    pub fn new(config: &Config) -> Self {
        Self {
            llm: LlmClient::new(config),
        }
    }

    /// 分析單頁內容
    ///
    /// 任何失敗（網路、模型錯誤、格式不對的 JSON）都只影響這一頁：
    /// 記錄錯誤後返回空列表。
    pub async fn analyze_page(&self, text: &str, page_num: u32) -> Vec<Record> {
        match self.try_analyze_page(text, page_num).await {
            Ok(records) => {
                debug!("第 {} 頁擷取到 {} 筆項目", page_num, records.len());
                records
            }
            Err(err) => {
                error!("第 {} 頁分析失敗: {}", page_num, err);
                Vec::new()
            }
        }
    }

    async fn try_analyze_page(&self, text: &str, page_num: u32) -> Result<Vec<Record>> {
        let user_message = prompts::page_analysis_prompt(text, page_num);
        let content = self
            .llm
            .chat_json(prompts::SYSTEM_PROMPT, &user_message)
            .await?;
        parse_analysis_response(&content)
    }

    /// 整合所有頁面的分析結果
    ///
    /// 整合是盡力而為：解碼失敗或任何其他錯誤都返回原始列表，
    /// 順序不變。空列表直接返回，不發出請求。
    pub async fn integrate_results(&self, all_records: Vec<Record>) -> Vec<Record> {
        if all_records.is_empty() {
            return all_records;
        }

        info!("開始整合 {} 筆分析結果", all_records.len());

        match self.try_integrate(&all_records).await {
            Ok(merged) => {
                info!("整合完成，合併後 {} 筆", merged.len());
                merged
            }
            Err(err) => {
                error!("結果整合失敗，保留未整合的結果: {}", err);
                all_records
            }
        }
    }

    async fn try_integrate(&self, all_records: &[Record]) -> Result<Vec<Record>> {
        let payload = serde_json::to_string_pretty(&json!({ "items": all_records }))?;
        let user_message = prompts::integration_prompt(&payload);
        let content = self
            .llm
            .chat_json(prompts::SYSTEM_PROMPT, &user_message)
            .await?;
        parse_integration_response(&content)
    }
}

/// 解析單頁分析的回應
///
/// 回應必須是含 `items` 陣列的 JSON 物件；陣列元素逐筆驗證，
/// 格式不正確的元素跳過不中止。
pub fn parse_analysis_response(content: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(content)?;
    let items = match value.get("items").and_then(|v| v.as_array()) {
        Some(items) => items.clone(),
        None => {
            warn!("回應中沒有 items 陣列");
            Vec::new()
        }
    };
    Ok(validate_items(&items))
}

/// 解析整合回應
///
/// 模型偶爾會在 JSON 前面加上說明文字，截到第一個 `{` 再解析；
/// 完全沒有 `{` 則視為擷取失敗。
pub fn parse_integration_response(content: &str) -> Result<Vec<Record>> {
    let content = content.trim();
    let content = if content.starts_with('{') {
        content
    } else {
        match content.find('{') {
            Some(index) => &content[index..],
            None => {
                return Err(ProcessError::Extraction {
                    reason: "整合回應中找不到 JSON 物件".to_string(),
                })
            }
        }
    };
    parse_analysis_response(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{Chapter, Source};

    #[test]
    fn test_parse_analysis_response_valid() {
        let content = r#"{"items":[{"chapter":"環境永續","source":"內文","item":"碳排放量","value":"100 噸"}]}"#;
        let records = parse_analysis_response(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chapter, Chapter::Environmental);
        assert_eq!(records[0].source, Source::BodyText);
    }

    #[test]
    fn test_parse_analysis_response_invalid_json() {
        assert!(parse_analysis_response("這不是 JSON").is_err());
    }

    #[test]
    fn test_parse_analysis_response_missing_items() {
        // 沒有 items 不算錯誤，返回空列表
        let records = parse_analysis_response(r#"{"result": "ok"}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_analysis_response_skips_bad_elements() {
        let content = r#"{"items":[
            {"chapter":"環境永續","source":"內文","item":"碳排放量","value":"100 噸"},
            {"chapter":"環境永續","source":"內文"},
            {"chapter":"不存在的章節","source":"內文","item":"x","value":null}
        ]}"#;
        let records = parse_analysis_response(content).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_integration_response_with_leading_text() {
        let content = r#"以下是整合後的結果：
{"items":[{"chapter":"附錄","source":"註釋","item":"GRI 對照表","value":null}]}"#;
        let records = parse_integration_response(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chapter, Chapter::Appendix);
    }

    #[test]
    fn test_parse_integration_response_no_json_object() {
        assert!(matches!(
            parse_integration_response("模型只回了一句話"),
            Err(ProcessError::Extraction { .. })
        ));
    }

    /// 需要真實 OPENAI_API_KEY，手動運行：
    /// cargo test test_analyze_page_live -- --ignored --nocapture
    #[tokio::test]
    #[ignore]
    async fn test_analyze_page_live() {
        crate::logger::init();
        let config = crate::config::Config::from_env().expect("缺少環境變數");
        let analyzer = EsgAnalyzer::new(&config);

        let text = "本公司 2024 年碳排放量為 100 噸，較去年減少 10%。";
        let records = analyzer.analyze_page(text, 1).await;

        println!("擷取到 {} 筆項目", records.len());
        for record in &records {
            println!("{:?}", record);
        }
    }
}
