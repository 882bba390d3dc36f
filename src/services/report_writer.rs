//! Excel 輸出
//!
//! 去重、排序後寫入單一工作表，欄位改為顯示用標題，欄寬依
//! 典型內容長度固定。寫入失敗直接向上傳播。

use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::Result;
use crate::models::record::Record;

/// 工作表名稱
const SHEET_NAME: &str = "ESG報告內容";

/// 顯示用欄位標題
const HEADERS: [&str; 4] = ["章節", "資料來源", "項目", "數據"];

/// 各欄固定寬度（章節 / 資料來源 / 項目 / 數據）
const COLUMN_WIDTHS: [f64; 4] = [15.0, 10.0, 40.0, 30.0];

/// 輸出摘要統計
#[derive(Debug, PartialEq, Eq)]
pub struct ReportStats {
    pub chapters: usize,
    pub sources: usize,
    pub items: usize,
    pub with_value: usize,
    pub total: usize,
}

/// 去重並排序：依（章節、資料來源、項目、數據）排序後移除完全
/// 重複的行。重複執行結果不變。
pub fn prepare_rows(mut records: Vec<Record>) -> Vec<Record> {
    records.sort();
    records.dedup();
    records
}

/// 計算摘要統計
pub fn summarize(rows: &[Record]) -> ReportStats {
    let chapters: HashSet<_> = rows.iter().map(|r| r.chapter).collect();
    let sources: HashSet<_> = rows.iter().map(|r| r.source).collect();
    let items: HashSet<_> = rows.iter().map(|r| r.item.as_str()).collect();
    ReportStats {
        chapters: chapters.len(),
        sources: sources.len(),
        items: items.len(),
        with_value: rows.iter().filter(|r| r.value.is_some()).count(),
        total: rows.len(),
    }
}

/// 寫入 Excel 並記錄統計資訊
///
/// 沒有數據的項目在「數據」欄留空（不寫入空字串）。
pub fn save_to_excel(records: Vec<Record>, excel_path: &Path) -> Result<ReportStats> {
    info!("保存結果到 Excel: {}", excel_path.display());

    let rows = prepare_rows(records);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, record) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, record.chapter.as_str())?;
        worksheet.write_string(row, 1, record.source.as_str())?;
        worksheet.write_string(row, 2, &record.item)?;
        if let Some(value) = &record.value {
            worksheet.write_string(row, 3, value)?;
        }
    }

    workbook.save(excel_path)?;

    let stats = summarize(&rows);
    info!("統計資訊:");
    info!("  章節數: {}", stats.chapters);
    info!("  資料來源數: {}", stats.sources);
    info!("  項目數: {}", stats.items);
    info!("  有數據的項目數: {}", stats.with_value);
    info!("  總條目數: {}", stats.total);

    Ok(stats)
}
