//! 解析服務 API 客戶端
//!
//! 封裝所有與文件解析服務（LlamaParse）的交互：上傳 PDF、輪詢任務
//! 狀態、取回逐頁解析結果。認證一律使用 Bearer token。

use std::path::Path;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ProcessError, Result};
use crate::models::parse::{JobStatus, JobStatusResponse, ParseResult, UploadResponse};

/// 解析服務客戶端
pub struct ParseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl ParseClient {
    /// 建立新的解析服務客戶端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.llama_base_url.clone(),
            api_key: config.llama_api_key.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            poll_timeout: Duration::from_secs(config.poll_timeout_secs),
        }
    }

    /// 上傳 PDF 文件，返回任務的 job_id
    ///
    /// 文件不存在時返回 [`ProcessError::NotFound`]，網路或非 2xx 響應
    /// 返回 [`ProcessError::Transport`]。
    pub async fn upload_pdf(&self, pdf_path: &Path) -> Result<String> {
        info!("開始上傳 PDF: {}", pdf_path.display());

        if !pdf_path.exists() {
            return Err(ProcessError::NotFound {
                path: pdf_path.display().to_string(),
            });
        }

        let bytes = tokio::fs::read(pdf_path).await?;
        let file_name = pdf_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("report.pdf")
            .to_string();

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let endpoint = format!("{}/upload", self.base_url);
        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ProcessError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let upload: UploadResponse =
            response
                .json()
                .await
                .map_err(|source| ProcessError::Transport {
                    endpoint: endpoint.clone(),
                    source,
                })?;

        info!("PDF 上傳成功，job_id: {}", upload.job_id);
        Ok(upload.job_id)
    }

    /// 查詢任務狀態
    pub async fn check_job_status(&self, job_id: &str) -> Result<JobStatus> {
        let endpoint = format!("{}/job/{}/status", self.base_url, job_id);
        let response: JobStatusResponse = self
            .http
            .get(&endpoint)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ProcessError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?
            .json()
            .await
            .map_err(|source| ProcessError::Transport { endpoint, source })?;

        Ok(JobStatus::from(response))
    }

    /// 等待解析任務完成
    ///
    /// 每隔 `poll_interval` 查詢一次狀態，直到完成、廠商回報失敗
    /// 或超過 `poll_timeout`。單次狀態查詢的網路錯誤只記錄警告，
    /// 下一輪重試。
    pub async fn wait_for_completion(&self, job_id: &str) -> Result<()> {
        info!("等待解析完成，最多等待 {} 秒", self.poll_timeout.as_secs());
        poll_until_terminal(
            || self.check_job_status(job_id),
            self.poll_interval,
            self.poll_timeout,
        )
        .await
    }

    /// 取回完整的逐頁解析結果
    pub async fn get_result(&self, job_id: &str) -> Result<ParseResult> {
        info!("獲取解析結果: {}", job_id);
        let endpoint = format!("{}/job/{}/result/json", self.base_url, job_id);
        self.http
            .get(&endpoint)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ProcessError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?
            .json()
            .await
            .map_err(|source| ProcessError::Transport { endpoint, source })
    }

    /// 取回未經類型化的原始 JSON 結果（結構瀏覽工具使用）
    pub async fn get_result_raw(&self, job_id: &str) -> Result<Value> {
        let endpoint = format!("{}/job/{}/result/json", self.base_url, job_id);
        self.http
            .get(&endpoint)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| ProcessError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?
            .json()
            .await
            .map_err(|source| ProcessError::Transport { endpoint, source })
    }
}

/// 有界的輪詢迴圈
///
/// 只有三種終止方式：完成、廠商回報失敗、超時。狀態查詢本身的
/// 錯誤視為暫時性，記錄後等下一輪。只要 `interval > 0`，任何
/// 狀態序列下都會在 `timeout` 內返回。
pub(crate) async fn poll_until_terminal<F, Fut>(
    mut check: F,
    interval: Duration,
    timeout: Duration,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<JobStatus>>,
{
    let start = Instant::now();
    loop {
        if start.elapsed() > timeout {
            warn!("等待超時");
            return Err(ProcessError::Timeout {
                timeout_secs: timeout.as_secs(),
            });
        }

        match check().await {
            Ok(JobStatus::Completed) => {
                info!("解析完成");
                return Ok(());
            }
            Ok(JobStatus::Failed { error }) => {
                warn!("解析失敗: {}", error);
                return Err(ProcessError::JobFailed { reason: error });
            }
            Ok(JobStatus::Pending) => {
                info!("解析中...（已等待 {} 秒）", start.elapsed().as_secs());
            }
            Err(err) => {
                warn!("檢查任務狀態失敗，下一輪重試: {}", err);
            }
        }

        sleep(interval).await;
    }
}
