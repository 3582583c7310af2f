use super::{JobListResponse, PageData, ProcessResponse, StatusResponse, UploadJob};
use crate::error::{Error, Result};
use crate::log_stream;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use url::Url;

/// HTTP client for the OCR backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "backend URL must be http or https, got '{}'",
                base_url
            )));
        }
        // join() replaces the last segment unless the path ends in a slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    /// URL of the backend log broadcast
    pub fn log_stream_url(&self) -> Result<Url> {
        log_stream::stream_url(&self.base)
    }

    /// Upload a scan or PDF and run OCR on it
    pub async fn upload(&self, path: &Path) -> Result<PageData> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        tracing::info!("Uploading {} ({} bytes)", file_name, bytes.len());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let response: ProcessResponse = self
            .http
            .post(self.endpoint("upload")?)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        PageData::from_response(response)
    }

    /// Re-run OCR on a job that is already on the server
    pub async fn process_existing(&self, job_id: &str) -> Result<PageData> {
        tracing::info!("Reprocessing job {}", job_id);
        let response: ProcessResponse = self
            .http
            .post(self.endpoint(&format!("process-existing/{}", job_id))?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        PageData::from_response(response)
    }

    pub async fn list_uploads(&self) -> Result<Vec<UploadJob>> {
        let response: JobListResponse = self
            .http
            .get(self.endpoint("list-uploads")?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let jobs: Vec<UploadJob> = response.into();
        tracing::debug!("Backend lists {} jobs", jobs.len());
        Ok(jobs)
    }

    pub async fn delete_upload(&self, job_id: &str) -> Result<()> {
        let response: StatusResponse = self
            .http
            .delete(self.endpoint(&format!("delete-upload/{}", job_id))?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(message) = response.into_result()? {
            tracing::info!("{}", message);
        }
        Ok(())
    }

    /// Download a backend-relative file such as `PageData::clean_image`
    pub async fn fetch_image(&self, path: &str) -> Result<Vec<u8>> {
        let bytes = self
            .http
            .get(self.endpoint(path)?)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
