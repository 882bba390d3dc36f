//! 日誌初始化
//!
//! 預設輸出 info 等級，可用 `RUST_LOG` 覆寫。

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日誌
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
