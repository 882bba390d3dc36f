//! 內容擷取
//!
//! 走訪逐頁解析結果，把每頁的文字項目清理後串成一個文字區塊。
//! 表格項目不進入擷取管線（只能透過 inspect_job 工具瀏覽），
//! 沒有文字的頁面會被跳過。

use crate::models::parse::{PageItem, ParseResult};

/// 清理文本：把連續空白壓成單一空格
///
/// U+2028（行分隔）與 U+2029（段落分隔）會破壞下游的 JSON 編碼，
/// 它們屬於 Unicode 空白，同一趟 `split_whitespace` 一併移除。
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 產生（頁碼、文字區塊）的惰性序列
///
/// 每頁把所有文字項目清理後以換行串接；清理後沒有任何文字的
/// 頁面不會出現在序列中。
pub fn page_text_blocks(result: &ParseResult) -> impl Iterator<Item = (u32, String)> + '_ {
    result.pages.iter().filter_map(|page| {
        let blocks: Vec<String> = page
            .items
            .iter()
            .filter_map(|item| match item {
                PageItem::Text { value } => {
                    let cleaned = clean_text(value);
                    (!cleaned.is_empty()).then_some(cleaned)
                }
                _ => None,
            })
            .collect();

        if blocks.is_empty() {
            None
        } else {
            Some((page.page, blocks.join("\n")))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  碳排放   100  噸 \n\t"), "碳排放 100 噸");
    }

    #[test]
    fn test_clean_text_removes_line_separators() {
        // U+2028 / U+2029 會破壞 JSON payload，必須消失
        let text = "第一段\u{2028}第二段\u{2029}第三段";
        assert_eq!(clean_text(text), "第一段 第二段 第三段");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text("   \u{2028} "), "");
    }

    fn sample_result() -> ParseResult {
        serde_json::from_str(
            r#"{
                "pages": [
                    {
                        "page": 1,
                        "items": [
                            {"type": "text", "value": "永續發展  報告"},
                            {"type": "table", "value": {"rows": []}},
                            {"type": "text", "value": "2024 年度"}
                        ]
                    },
                    {
                        "page": 2,
                        "items": [
                            {"type": "table", "value": {"rows": []}},
                            {"type": "text", "value": "   "}
                        ]
                    },
                    {
                        "page": 3,
                        "items": [
                            {"type": "text", "value": "附錄"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_page_text_blocks_joins_text_items() {
        let result = sample_result();
        let blocks: Vec<(u32, String)> = page_text_blocks(&result).collect();

        // 第 2 頁只有表格與空白文字，被跳過
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], (1, "永續發展 報告\n2024 年度".to_string()));
        assert_eq!(blocks[1], (3, "附錄".to_string()));
    }

    #[test]
    fn test_page_text_blocks_excludes_tables() {
        let result = sample_result();
        for (_, text) in page_text_blocks(&result) {
            assert!(!text.contains("rows"));
        }
    }
}
