//! CV source configuration from environment variables.

use std::env;

/// Which CV sources are configured. Priority at load time is
/// inline text > local file > remote URL.
#[derive(Debug, Clone, Default)]
pub struct CvConfig {
    /// Full CV text given directly (env CV_TEXT).
    pub inline_text: Option<String>,
    /// Path to a local PDF (env CV_PATH).
    pub local_path: Option<String>,
    /// URL of a remote PDF (env CV_URL).
    pub remote_url: Option<String>,
}

impl CvConfig {
    /// Reads CV_TEXT, CV_PATH, CV_URL. Blank values count as unset.
    pub fn from_env() -> Self {
        let non_blank = |v: std::result::Result<String, env::VarError>| {
            v.ok().filter(|s| !s.trim().is_empty())
        };
        Self {
            inline_text: non_blank(env::var("CV_TEXT")),
            local_path: non_blank(env::var("CV_PATH")),
            remote_url: non_blank(env::var("CV_URL")),
        }
    }

    /// Config with only inline text set.
    pub fn with_inline_text(text: impl Into<String>) -> Self {
        Self {
            inline_text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// **Test: from_env treats blank variables as unset.**
    #[test]
    #[serial]
    fn test_from_env_blank_is_unset() {
        env::set_var("CV_TEXT", "   ");
        env::remove_var("CV_PATH");
        env::set_var("CV_URL", "https://example.com/cv.pdf");

        let config = CvConfig::from_env();
        assert!(config.inline_text.is_none());
        assert!(config.local_path.is_none());
        assert_eq!(
            config.remote_url.as_deref(),
            Some("https://example.com/cv.pdf")
        );

        env::remove_var("CV_TEXT");
        env::remove_var("CV_URL");
    }
}
