//! LLM 提示詞
//!
//! 固定的分類體系（6 個章節、4 種資料來源）與整合規則。
//! 提示詞內容本身含有大量 `{`/`}`，整合提示用 `str::replace`
//! 代入先前結果，避免 `format!` 的跳脫問題。

/// 系統提示：ESG 報告分析的固定分類體系與輸出格式
pub const SYSTEM_PROMPT: &str = r#"你是一個專業的 ESG 報告分析專家。你的任務是從 ESG 報告中提取關鍵資訊，並按照以下結構整理：

1. 章節 (chapter)：必須是以下其中之一
   - 導言（前言、董事長的話、關於報告等）
   - 實踐永續管理（永續目標、ESG策略等）
   - 營運與治理（公司治理、經濟績效等）
   - 環境永續（環保、節能、減碳等）
   - 社會共融（員工照顧、社會參與等）
   - 附錄

2. 資料來源 (source)：必須是以下其中之一
   - 摘要（重點內容）
   - 內文（主要說明文字）
   - 圖表（數據統計）
   - 註釋（補充說明）

3. 項目 (item)：
   - 提取所有關鍵的 ESG 指標或重要敘述
   - 特別注意以下類型的資訊：
     * 評比結果（如 MSCI、CDP 等評級）
     * 具體目標（如減碳目標、用水目標等）
     * 成果數據（如節能減碳成效、社會投資金額等）
     * 重要政策（如環境政策、人權政策等）
   - 確保項目描述清晰完整
   - 避免重複或過於籠統的描述

4. 數據 (value)：
   - 提取所有具體的數字、指標和評級
   - 包含完整的：
     * 數值（如 "100"）
     * 單位（如 "%"、"小時"、"百萬元"）
     * 時間資訊（如 "2024年"）
     * 變化資訊（如 "較去年增加10%"）
   - 如果項目沒有具體數據，請填入 null（不要留空字串或填入 "N/A"）

分析要求：
1. 完整性：不要遺漏任何關鍵資訊
2. 準確性：確保數據和描述的對應關係正確
3. 結構性：確保資訊被正確分類到對應章節
4. 去重複：合併相似或重複的資訊
5. 格式檢查：確保輸出的 JSON 格式正確

請用以下 JSON 格式回覆：
{
    "items": [
        {
            "chapter": "章節名稱",
            "source": "資料來源",
            "item": "項目名稱",
            "value": "數據值"
        }
    ]
}"#;

/// 整合提示模板，`{previous_results}` 會被替換為先前的分析結果
const INTEGRATION_PROMPT_TEMPLATE: &str = r#"請整合以下 ESG 報告的分析結果。

整合規則：
1. 移除完全重複的項目
2. 合併相似項目，保留更完整的描述
3. 統一數據格式和單位
4. 確保時間序列的一致性
5. 保持資訊的完整性和準確性

輸入的分析結果如下：
{previous_results}

請提供整合後的結果，使用相同的 JSON 格式：
{
    "items": [
        {
            "chapter": "章節名稱",
            "source": "資料來源",
            "item": "項目名稱",
            "value": "數據值"
        }
    ]
}

注意：
1. 確保輸出是有效的 JSON 格式
2. 數據值如果不存在應該是 null，不要使用空字串
3. 確保所有必要欄位都存在
4. 避免特殊字符或跳脫字符造成的解析錯誤"#;

/// 組出整合提示，代入先前累積的分析結果（JSON 字串）
pub fn integration_prompt(previous_results: &str) -> String {
    INTEGRATION_PROMPT_TEMPLATE.replace("{previous_results}", previous_results)
}

/// 組出單頁分析的使用者訊息，附上頁碼與內容長度資訊
pub fn page_analysis_prompt(text: &str, page_num: u32) -> String {
    format!(
        "請分析以下ESG報告內容：\n\n第 {} 頁（共 {} 字）內容：\n\n{}",
        page_num,
        text.chars().count(),
        text
    )
}
