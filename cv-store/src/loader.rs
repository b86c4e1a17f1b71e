//! CV loading: inline text, local PDF, or remote PDF URL, in that priority order.

use std::path::Path;
use std::time::Duration;

use tracing::info;
use twinbot_core::{Result, TwinError};

use crate::config::CvConfig;
use crate::document::{CvDocument, CvSource};

/// Timeout for fetching the remote CV PDF.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Loads the CV from the first available configured source.
///
/// A missing local file falls through to the next source; a local file that
/// exists but cannot be read or extracted is a `Fetch` error. With no source
/// configured at all this is a `Config` error and startup must abort.
/// Idempotent: repeated calls without external state changes return
/// textually identical content.
pub async fn load(config: &CvConfig) -> Result<CvDocument> {
    if let Some(text) = &config.inline_text {
        info!(chars = text.len(), "CV loaded from inline text");
        return CvDocument::new(vec![text.clone()], CvSource::Inline);
    }

    if let Some(path) = &config.local_path {
        if Path::new(path).exists() {
            let bytes = std::fs::read(path)
                .map_err(|e| TwinError::Fetch(format!("read {}: {}", path, e)))?;
            let pages = extract_pdf_pages(&bytes)?;
            info!(path = %path, pages = pages.len(), "CV loaded from local PDF");
            return CvDocument::new(pages, CvSource::LocalFile);
        }
        info!(path = %path, "CV_PATH does not exist; trying next source");
    }

    if let Some(url) = &config.remote_url {
        let pages = fetch_remote_pdf(url).await?;
        info!(url = %url, pages = pages.len(), "CV loaded from remote PDF");
        return CvDocument::new(pages, CvSource::RemoteUrl);
    }

    Err(TwinError::Config(
        "no CV source configured: set CV_TEXT, CV_PATH or CV_URL".to_string(),
    ))
}

/// Downloads the PDF at `url` (bounded by [`FETCH_TIMEOUT`]) and extracts its pages.
/// Transport errors and non-success statuses are `Fetch` errors, never "no CV".
async fn fetch_remote_pdf(url: &str) -> Result<Vec<String>> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| TwinError::Fetch(format!("http client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| TwinError::Fetch(format!("fetch {}: {}", url, e)))?
        .error_for_status()
        .map_err(|e| TwinError::Fetch(format!("fetch {}: {}", url, e)))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| TwinError::Fetch(format!("fetch {}: {}", url, e)))?;

    extract_pdf_pages(&bytes)
}

/// Extracts text page by page. Pages with no extractable text become empty
/// strings so the joined content stays aligned with page indices.
fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| TwinError::Fetch(format!("pdf extraction: {}", e)))?;
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// **Test: Inline text wins and load() is idempotent.**
    #[tokio::test]
    async fn test_load_inline_idempotent() {
        let config = CvConfig {
            inline_text: Some("Name: Jane Doe\nSkills: Go, Rust".to_string()),
            local_path: Some("/nonexistent/cv.pdf".to_string()),
            remote_url: None,
        };

        let first = load(&config).await.unwrap();
        let second = load(&config).await.unwrap();
        assert_eq!(first.content(), second.content());
        assert_eq!(first.source(), CvSource::Inline);
        assert_eq!(first.content(), "Name: Jane Doe\nSkills: Go, Rust");
    }

    /// **Test: No configured source is a Config error, not Fetch.**
    #[tokio::test]
    async fn test_load_without_sources_is_config_error() {
        let config = CvConfig::default();
        match load(&config).await {
            Err(TwinError::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other.map(|d| d.content())),
        }
    }

    /// **Test: A missing local file falls through; with no other source the
    /// result is still a Config error.**
    #[tokio::test]
    async fn test_missing_local_file_falls_through() {
        let config = CvConfig {
            inline_text: None,
            local_path: Some("/definitely/not/here.pdf".to_string()),
            remote_url: None,
        };
        assert!(matches!(load(&config).await, Err(TwinError::Config(_))));
    }

    /// **Test: A local file that exists but is not a readable PDF is a Fetch error.**
    #[tokio::test]
    async fn test_unreadable_local_file_is_fetch_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let config = CvConfig {
            inline_text: None,
            local_path: Some(file.path().to_string_lossy().into_owned()),
            remote_url: None,
        };
        assert!(matches!(load(&config).await, Err(TwinError::Fetch(_))));
    }

    /// **Test: Inline-only config loads the text as a single segment.**
    #[tokio::test]
    async fn test_with_inline_text_single_segment() {
        let doc = load(&CvConfig::with_inline_text("Name: Jane Doe"))
            .await
            .unwrap();
        assert_eq!(doc.segments().len(), 1);
        assert_eq!(doc.content(), "Name: Jane Doe");
    }

    /// **Test: An unreachable remote URL is a Fetch error.**
    #[tokio::test]
    async fn test_unreachable_url_is_fetch_error() {
        let config = CvConfig {
            inline_text: None,
            local_path: None,
            remote_url: Some("http://127.0.0.1:1/cv.pdf".to_string()),
        };
        assert!(matches!(load(&config).await, Err(TwinError::Fetch(_))));
    }
}
