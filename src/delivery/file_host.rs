//! Upload fallback for archives too large to attach inline.
use crate::archive::StagedArchive;
use crate::error::GetError;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use tracing::{info, instrument};
use url::Url;

/// Client for a catbox-style host: multipart POST in, bare URL out. The client passed in
/// bounds connect and per-read waits, never the whole transfer.
#[derive(Clone)]
pub struct FileHost {
    http: reqwest::Client,
    url: String,
}

impl FileHost {
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }

    #[instrument(level = "debug", skip_all, fields(file = %archive.attachment_name()))]
    pub async fn upload(&self, archive: &StagedArchive) -> Result<String, GetError> {
        let file = tokio::fs::File::open(archive.path()).await?;
        let len = file.metadata().await?.len();
        let part = Part::stream_with_length(reqwest::Body::from(file), len)
            .file_name(archive.attachment_name().to_string());
        let form = Form::new()
            .text("reqtype", "fileupload")
            .part("fileToUpload", part);

        let resp = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| GetError::Upload(e.to_string()))?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(GetError::Upload(format!(
                "file host returned HTTP {}",
                status.as_u16()
            )));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| GetError::Upload(e.to_string()))?;
        let link = parse_upload_link(&body)?;
        info!(target = "upload", bytes = len, link = %link, "archive uploaded");
        Ok(link)
    }
}

/// The host answers with a plain-text URL; anything else is a failed upload.
pub fn parse_upload_link(body: &str) -> Result<String, GetError> {
    let link = body.trim();
    if !link.starts_with("https://") {
        return Err(GetError::Upload(format!("invalid file host response: {link}")));
    }
    Url::parse(link).map_err(|e| GetError::Upload(format!("invalid file host response: {e}")))?;
    Ok(link.to_string())
}
