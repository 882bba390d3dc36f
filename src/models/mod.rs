pub mod parse;
pub mod record;

pub use parse::{JobStatus, PageItem, ParseResult, ParsedPage, UploadResponse};
pub use record::{validate_items, Chapter, Record, Source};
