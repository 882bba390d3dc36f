//! 解析服務的 wire 類型
//!
//! 對應 LlamaParse API 的三個端點：上傳、狀態查詢、JSON 結果。

use serde::Deserialize;

/// `POST /upload` 的響應
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub job_id: String,
}

/// `GET /job/{id}/status` 的原始響應
#[derive(Debug, Deserialize)]
pub struct JobStatusResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// 解析任務的狀態
///
/// 除了 `completed` 與 `failed` 以外的狀態字串一律視為處理中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Completed,
    Failed { error: String },
}

impl From<JobStatusResponse> for JobStatus {
    fn from(response: JobStatusResponse) -> Self {
        match response.status.as_str() {
            "completed" => JobStatus::Completed,
            "failed" => JobStatus::Failed {
                error: response.error.unwrap_or_else(|| "未知錯誤".to_string()),
            },
            _ => JobStatus::Pending,
        }
    }
}

/// `GET /job/{id}/result/json` 的完整解析結果
#[derive(Debug, Deserialize)]
pub struct ParseResult {
    pub pages: Vec<ParsedPage>,
}

/// 單一頁面：頁碼與依序排列的內容項目
#[derive(Debug, Deserialize)]
pub struct ParsedPage {
    pub page: u32,
    #[serde(default)]
    pub items: Vec<PageItem>,
}

/// 頁面內容項目，依 `type` 欄位區分
///
/// 未知的項目類型不應讓整份結果解析失敗，落到 `Other`。
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageItem {
    Text { value: String },
    Table { value: serde_json::Value },
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_mapping() {
        let completed = JobStatusResponse {
            status: "completed".to_string(),
            error: None,
        };
        assert_eq!(JobStatus::from(completed), JobStatus::Completed);

        let failed = JobStatusResponse {
            status: "failed".to_string(),
            error: Some("corrupt file".to_string()),
        };
        assert_eq!(
            JobStatus::from(failed),
            JobStatus::Failed {
                error: "corrupt file".to_string()
            }
        );

        // failed 但廠商沒給錯誤訊息
        let failed_no_error = JobStatusResponse {
            status: "failed".to_string(),
            error: None,
        };
        assert_eq!(
            JobStatus::from(failed_no_error),
            JobStatus::Failed {
                error: "未知錯誤".to_string()
            }
        );

        let pending = JobStatusResponse {
            status: "processing".to_string(),
            error: None,
        };
        assert_eq!(JobStatus::from(pending), JobStatus::Pending);
    }

    #[test]
    fn test_parse_result_deserialization() {
        let json = r#"{
            "pages": [
                {
                    "page": 1,
                    "items": [
                        {"type": "text", "value": "永續發展報告"},
                        {"type": "table", "value": {"rows": [["a", "b"]]}},
                        {"type": "heading", "value": "未知類型"}
                    ]
                },
                {"page": 2}
            ]
        }"#;

        let result: ParseResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.pages.len(), 2);
        assert_eq!(result.pages[0].page, 1);
        assert_eq!(result.pages[0].items.len(), 3);
        assert!(matches!(&result.pages[0].items[0], PageItem::Text { value } if value == "永續發展報告"));
        assert!(matches!(&result.pages[0].items[1], PageItem::Table { .. }));
        assert!(matches!(&result.pages[0].items[2], PageItem::Other));
        // 沒有 items 欄位的頁面
        assert!(result.pages[1].items.is_empty());
    }
}
