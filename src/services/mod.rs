pub mod analyzer;
pub mod extractor;
pub mod report_writer;

pub use analyzer::EsgAnalyzer;
pub use report_writer::{prepare_rows, save_to_excel, ReportStats};
