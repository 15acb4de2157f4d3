//! Notifier adapters.
//!
//! The terminal notifier lives in the CLI crate; this one records messages
//! so tests can assert on them.

use std::sync::{Arc, Mutex};

use classwright_core::application::ports::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Records every notice in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Messages of every level, in order.
    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }

    /// Warning messages only.
    pub fn warnings(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.level == NoticeLevel::Warn)
            .map(|n| n.message)
            .collect()
    }

    fn push(&self, level: NoticeLevel, message: &str) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(Notice {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl Notifier for MemoryNotifier {
    fn info(&self, message: &str) {
        self.push(NoticeLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(NoticeLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_log() {
        let notifier = MemoryNotifier::new();
        let handle = notifier.clone();

        notifier.info("one");
        handle.warn("two");
        notifier.error("three");

        assert_eq!(notifier.messages(), vec!["one", "two", "three"]);
        assert_eq!(handle.warnings(), vec!["two"]);
    }
}
