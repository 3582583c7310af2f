//! Backend API: wire types and the HTTP client

mod client;

pub use client::ApiClient;

use crate::error::{Error, Result};
use crate::layout::OcrLayout;
use crate::text::join_hyphenated_lines;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const STATUS_ERROR: &str = "error";
const UNKNOWN_BACKEND_ERROR: &str = "Unknown backend error";

/// Response of `POST /upload` and `POST /process-existing/{id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub clean_image: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Object, serialized object, or absent
    #[serde(default)]
    pub layout: Value,
    #[serde(default)]
    pub typos: Vec<String>,
}

/// A processed page ready for display
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageData {
    pub job_id: Option<String>,
    /// Backend-relative path of the cleaned scan
    pub clean_image: String,
    pub text: String,
    pub layout: OcrLayout,
    /// Words the backend spell checker did not recognise
    pub typos: Vec<String>,
}

impl PageData {
    /// Validate a processing response and normalise it for display.
    ///
    /// Fails on `status: "error"` and on an unparsable layout. The text gets
    /// its hyphenated line breaks joined.
    pub fn from_response(response: ProcessResponse) -> Result<Self> {
        if response.status == STATUS_ERROR {
            return Err(Error::Backend(
                response
                    .message
                    .unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string()),
            ));
        }

        let layout = OcrLayout::from_value(response.layout)?;
        let text = join_hyphenated_lines(response.text.as_deref().unwrap_or_default());

        Ok(Self {
            job_id: response.job_id,
            clean_image: response.clean_image.unwrap_or_default(),
            text,
            layout,
            typos: response.typos,
        })
    }

    pub fn has_image(&self) -> bool {
        !self.clean_image.is_empty()
    }
}

/// One uploaded document on the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadJob {
    pub id: String,
    pub upload_date: String,
    pub original_file: String,
    #[serde(default)]
    pub processed_files: Vec<String>,
}

impl UploadJob {
    /// Last path segment of the original upload
    pub fn file_name(&self) -> &str {
        self.original_file
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.original_file)
    }
}

/// `GET /list-uploads`; a server without any uploads answers with a bare `[]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JobListResponse {
    Wrapped { jobs: Vec<UploadJob> },
    Bare(Vec<UploadJob>),
}

impl From<JobListResponse> for Vec<UploadJob> {
    fn from(response: JobListResponse) -> Self {
        match response {
            JobListResponse::Wrapped { jobs } => jobs,
            JobListResponse::Bare(jobs) => jobs,
        }
    }
}

/// Plain `{status, message}` acknowledgement
#[derive(Debug, Clone, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

impl StatusResponse {
    fn into_result(self) -> Result<Option<String>> {
        if self.status == STATUS_ERROR {
            Err(Error::Backend(
                self.message
                    .unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string()),
            ))
        } else {
            Ok(self.message)
        }
    }
}
