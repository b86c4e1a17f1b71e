//! The loaded CV document: ordered text segments plus their provenance.

use twinbot_core::{Result, TwinError};

/// Where the CV text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvSource {
    Inline,
    LocalFile,
    RemoteUrl,
}

/// Ordered sequence of CV text segments (one per PDF page, or a single segment
/// for inline text). Empty pages stay as empty strings so the newline-joined
/// content remains aligned with page indices. Immutable after construction.
#[derive(Debug, Clone)]
pub struct CvDocument {
    segments: Vec<String>,
    source: CvSource,
}

impl CvDocument {
    /// Builds a document, requiring at least one non-empty segment.
    pub fn new(segments: Vec<String>, source: CvSource) -> Result<Self> {
        if segments.iter().all(|s| s.trim().is_empty()) {
            return Err(TwinError::Fetch(format!(
                "CV source {:?} produced no text",
                source
            )));
        }
        Ok(Self { segments, source })
    }

    /// All segments in original order, empty ones included.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The whole CV as one string, segments joined by newlines.
    pub fn content(&self) -> String {
        self.segments.join("\n")
    }

    pub fn source(&self) -> CvSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: A document needs at least one non-empty segment.**
    #[test]
    fn test_all_empty_segments_rejected() {
        assert!(CvDocument::new(vec![], CvSource::Inline).is_err());
        assert!(CvDocument::new(vec!["".into(), "  ".into()], CvSource::LocalFile).is_err());
    }

    /// **Test: Empty segments are kept in place so page indices stay referenceable.**
    #[test]
    fn test_content_preserves_empty_segments() {
        let doc = CvDocument::new(
            vec!["page one".into(), "".into(), "page three".into()],
            CvSource::LocalFile,
        )
        .unwrap();
        assert_eq!(doc.content(), "page one\n\npage three");
        assert_eq!(doc.segments().len(), 3);
    }
}
