//! Transient outcome banners drawn over the top-right of the form.

use std::time::Duration;

/// How long a success banner stays on screen.
pub const SUCCESS_BANNER_LIFETIME: Duration = Duration::from_millis(5000);
/// How long an error banner stays on screen.
pub const ERROR_BANNER_LIFETIME: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Success,
    Error,
}

/// A notification with a title and, for successes, the sanitized-data dump
/// as its body. Banners are fire-and-forget: once shown, each lives out its
/// fixed lifetime regardless of what happens next.
#[derive(Debug, Clone)]
pub struct Banner {
    pub level: BannerLevel,
    pub title: String,
    pub body: Option<String>,
}

impl Banner {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Success,
            title: title.into(),
            body: Some(body.into()),
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Error,
            title: title.into(),
            body: None,
        }
    }

    pub fn lifetime(&self) -> Duration {
        match self.level {
            BannerLevel::Success => SUCCESS_BANNER_LIFETIME,
            BannerLevel::Error => ERROR_BANNER_LIFETIME,
        }
    }
}
