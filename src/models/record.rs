//! 擷取結果的資料模型
//!
//! 一筆 [`Record`] 是從報告中擷取出的一項結構化資訊。章節與資料來源
//! 是封閉的分類（各 6 / 4 種），LLM 回傳的字串若不在分類內，該筆
//! 項目會和欄位不全的項目一樣被丟棄並記錄警告。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// 章節分類（排序依宣告順序，即報告目錄順序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Chapter {
    #[serde(rename = "導言")]
    Introduction,
    #[serde(rename = "實踐永續管理")]
    SustainabilityManagement,
    #[serde(rename = "營運與治理")]
    OperationsGovernance,
    #[serde(rename = "環境永續")]
    Environmental,
    #[serde(rename = "社會共融")]
    SocialInclusion,
    #[serde(rename = "附錄")]
    Appendix,
}

impl Chapter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chapter::Introduction => "導言",
            Chapter::SustainabilityManagement => "實踐永續管理",
            Chapter::OperationsGovernance => "營運與治理",
            Chapter::Environmental => "環境永續",
            Chapter::SocialInclusion => "社會共融",
            Chapter::Appendix => "附錄",
        }
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 資料來源分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "摘要")]
    Summary,
    #[serde(rename = "內文")]
    BodyText,
    #[serde(rename = "圖表")]
    Chart,
    #[serde(rename = "註釋")]
    Note,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Summary => "摘要",
            Source::BodyText => "內文",
            Source::Chart => "圖表",
            Source::Note => "註釋",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一筆擷取結果
///
/// `value` 為 `None` 表示該項目沒有具體數據（永遠不會是空字串）。
/// 排序鍵為（章節、資料來源、項目、數據），derive 的欄位順序即是排序順序。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Record {
    pub chapter: Chapter,
    pub source: Source,
    pub item: String,
    pub value: Option<String>,
}

impl Record {
    /// 正規化數據欄位：空白字串視同沒有數據
    fn normalized(mut self) -> Self {
        if let Some(value) = &self.value {
            if value.trim().is_empty() {
                self.value = None;
            }
        }
        self
    }
}

/// 逐筆驗證 LLM 回傳的項目
///
/// 四個欄位缺一不可（`value` 欄位必須存在，可為 null）；欄位不全、
/// 類型不對或章節／來源不在分類內的項目會被跳過並記錄警告，
/// 不會讓整頁分析失敗。
pub fn validate_items(items: &[Value]) -> Vec<Record> {
    let mut validated = Vec::with_capacity(items.len());
    for raw in items {
        // serde 會把缺少的 Option 欄位解成 None，先確認 value 鍵
        // 確實存在：可以是 null，但不可缺席
        if raw.get("value").is_none() {
            warn!("跳過格式不正確的項目: {} (缺少 value 欄位)", raw);
            continue;
        }
        match serde_json::from_value::<Record>(raw.clone()) {
            Ok(record) => validated.push(record.normalized()),
            Err(err) => {
                warn!("跳過格式不正確的項目: {} ({})", raw, err);
            }
        }
    }
    validated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_items_keeps_complete_records() {
        let items = vec![json!({
            "chapter": "環境永續",
            "source": "內文",
            "item": "碳排放量",
            "value": "100 噸"
        })];

        let records = validate_items(&items);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chapter, Chapter::Environmental);
        assert_eq!(records[0].source, Source::BodyText);
        assert_eq!(records[0].item, "碳排放量");
        assert_eq!(records[0].value.as_deref(), Some("100 噸"));
    }

    #[test]
    fn test_validate_items_allows_null_value() {
        let items = vec![json!({
            "chapter": "導言",
            "source": "摘要",
            "item": "董事長的話",
            "value": null
        })];

        let records = validate_items(&items);
        assert_eq!(records.len(), 1);
        assert!(records[0].value.is_none());
    }

    #[test]
    fn test_validate_items_drops_missing_fields() {
        // 缺 value 欄位
        let items = vec![
            json!({"chapter": "附錄", "source": "註釋", "item": "GRI 索引"}),
            // 缺 item 欄位
            json!({"chapter": "附錄", "source": "註釋", "value": "x"}),
        ];
        assert!(validate_items(&items).is_empty());
    }

    #[test]
    fn test_validate_items_requires_value_key() {
        // 其他三個欄位俱全但 value 鍵缺席：必須丟棄，不得視同 null
        let items = vec![json!({
            "chapter": "環境永續",
            "source": "內文",
            "item": "碳排放量"
        })];
        assert!(validate_items(&items).is_empty());
    }

    #[test]
    fn test_validate_items_drops_unknown_taxonomy() {
        let items = vec![
            json!({"chapter": "其他章節", "source": "內文", "item": "a", "value": null}),
            json!({"chapter": "環境永續", "source": "訪談", "item": "b", "value": null}),
        ];
        assert!(validate_items(&items).is_empty());
    }

    #[test]
    fn test_validate_items_normalizes_empty_value() {
        let items = vec![json!({
            "chapter": "社會共融",
            "source": "圖表",
            "item": "志工時數",
            "value": "  "
        })];

        let records = validate_items(&items);
        assert_eq!(records.len(), 1);
        assert!(records[0].value.is_none());
    }

    #[test]
    fn test_record_ordering_follows_taxonomy() {
        let a = Record {
            chapter: Chapter::Introduction,
            source: Source::Note,
            item: "z".to_string(),
            value: None,
        };
        let b = Record {
            chapter: Chapter::Appendix,
            source: Source::Summary,
            item: "a".to_string(),
            value: None,
        };
        // 章節優先於資料來源與項目
        assert!(a < b);
    }

    #[test]
    fn test_record_round_trip_labels() {
        let record = Record {
            chapter: Chapter::Environmental,
            source: Source::Chart,
            item: "再生能源比例".to_string(),
            value: Some("25%".to_string()),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["chapter"], "環境永續");
        assert_eq!(json["source"], "圖表");
    }
}
