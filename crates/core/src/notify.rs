use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTO_CLOSE_MS: u64 = 5_000;
pub const CHECKOUT_COMING_SOON: &str = "Checkout coming soon";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Error,
    Info,
}

/// Transient toast shown to the shopper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub auto_close_ms: u64,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), auto_close_ms: DEFAULT_AUTO_CLOSE_MS }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn checkout_coming_soon() -> Self {
        Self::info(CHECKOUT_COMING_SOON)
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeLevel, DEFAULT_AUTO_CLOSE_MS};

    #[test]
    fn checkout_notice_is_informational() {
        let notice = Notice::checkout_coming_soon();

        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, "Checkout coming soon");
        assert_eq!(notice.auto_close_ms, DEFAULT_AUTO_CLOSE_MS);
    }
}
