//! Résumé text sourcing for the upload endpoint: base64 PDF payloads, remote PDF
//! URLs, or plain text. PDF parsing runs on the blocking pool.

use std::time::Duration;

use anyhow::Context;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use bytes::{Bytes, BytesMut};
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::routes::MAX_BODY_BYTES;

/// Where the résumé for an upload comes from, after request validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeSource {
    File(String),
    Url(Url),
    Text(String),
}

/// Downloads résumé PDFs referenced by URL.
#[derive(Clone)]
pub struct ResumeFetcher {
    client: Client,
}

impl ResumeFetcher {
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client for resume downloads")?;
        Ok(Self { client })
    }

    /// Downloads `url`, refusing bodies larger than the upload body limit.
    pub async fn fetch(&self, url: &Url) -> Result<Bytes, AppError> {
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to download resume: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Resume download returned HTTP {}",
                status.as_u16()
            )));
        }

        if let Some(declared) = response.content_length() {
            let declared = usize::try_from(declared).unwrap_or(usize::MAX);
            check_resume_size(declared, MAX_BODY_BYTES)?;
        }

        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read resume body: {e}")))?
        {
            append_capped(&mut body, &chunk, MAX_BODY_BYTES)?;
        }

        debug!(url = %url, bytes = body.len(), "resume downloaded");
        Ok(body.freeze())
    }
}

fn check_resume_size(size: usize, cap: usize) -> Result<(), AppError> {
    if size > cap {
        warn!(bytes = size, cap, "resume download over size limit");
        return Err(AppError::UnprocessableEntity(format!(
            "Resume file exceeds the {} MiB limit",
            cap / (1024 * 1024)
        )));
    }
    Ok(())
}

fn append_capped(body: &mut BytesMut, chunk: &[u8], cap: usize) -> Result<(), AppError> {
    check_resume_size(body.len() + chunk.len(), cap)?;
    body.extend_from_slice(chunk);
    Ok(())
}

/// Parses and checks a résumé URL. Only absolute http(s) URLs are accepted.
pub fn parse_resume_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AppError::Validation(format!("resumeUrl is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Validation(format!(
            "resumeUrl must use http or https, got '{other}'"
        ))),
    }
}

/// Decodes a base64 payload, tolerating a `data:...;base64,` prefix and line breaks.
pub fn decode_base64_payload(payload: &str) -> Result<Vec<u8>, AppError> {
    let data = match payload.split_once(";base64,") {
        Some((header, data)) if header.starts_with("data:") => data,
        _ => payload,
    };
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    BASE64_STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AppError::Validation(format!("fileBase64 is not valid base64: {e}")))
}

/// Extracts the text layer of a PDF.
pub async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let size = bytes.len();
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            if e.is_panic() {
                // pdf-extract panics on some malformed documents
                warn!(bytes = size, "PDF extraction panicked");
                AppError::UnprocessableEntity("Could not read the PDF".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task was cancelled: {e}"))
            }
        })?;

    let text = extracted.map_err(|e| {
        warn!(bytes = size, "PDF extraction failed: {e:?}");
        AppError::UnprocessableEntity("Could not read the PDF".to_string())
    })?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The PDF contains no extractable text".to_string(),
        ));
    }

    debug!(bytes = size, chars = text.chars().count(), "PDF text extracted");
    Ok(text)
}

/// Resolves a source to plain résumé text.
pub async fn resolve_resume_text(
    source: &ResumeSource,
    fetcher: &ResumeFetcher,
) -> Result<String, AppError> {
    match source {
        ResumeSource::File(payload) => extract_pdf_text(decode_base64_payload(payload)?).await,
        ResumeSource::Url(url) => {
            let body = fetcher.fetch(url).await?;
            extract_pdf_text(body.into()).await
        }
        ResumeSource::Text(text) => Ok(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_base64() {
        assert_eq!(decode_base64_payload("JVBERi0xLjQ=").unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_decode_data_uri_with_line_breaks() {
        let payload = "data:application/pdf;base64,JVBE\nRi0x\r\nLjQ=";
        assert_eq!(decode_base64_payload(payload).unwrap(), b"%PDF-1.4");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_base64_payload("not base64 at all!").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_parse_resume_url() {
        assert!(parse_resume_url("https://cdn.example.com/cv.pdf").is_ok());
        assert!(matches!(
            parse_resume_url("ftp://example.com/cv.pdf"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(parse_resume_url("cv.pdf"), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_append_capped_stops_past_the_limit() {
        let mut body = BytesMut::new();
        append_capped(&mut body, b"%PDF-", 8).unwrap();
        append_capped(&mut body, b"1.4", 8).unwrap();
        assert_eq!(&body[..], b"%PDF-1.4");

        let err = append_capped(&mut body, b"x", 8).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        assert_eq!(body.len(), 8);
    }

    #[test]
    fn test_declared_length_over_limit_is_rejected() {
        assert!(check_resume_size(MAX_BODY_BYTES, MAX_BODY_BYTES).is_ok());
        let err = check_resume_size(MAX_BODY_BYTES + 1, MAX_BODY_BYTES).unwrap_err();
        assert!(err.to_string().contains("15 MiB"));
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_are_unprocessable() {
        let err = extract_pdf_text(b"this is not a pdf".to_vec()).await.unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_text_source_passes_through() {
        let fetcher = ResumeFetcher::new(5).unwrap();
        let text = resolve_resume_text(&ResumeSource::Text("Built things".to_string()), &fetcher)
            .await
            .unwrap();
        assert_eq!(text, "Built things");
    }
}
