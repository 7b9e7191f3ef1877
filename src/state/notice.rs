/// Specifying the tone of a transient notice.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A message shown in the footer for a limited number of ticks.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub remaining: u16,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: String, ticks: u16) -> Self {
        Notice {
            kind,
            message,
            remaining: ticks,
        }
    }

    /// Count down one tick. Returns false once the notice has expired.
    ///
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires() {
        let mut notice = Notice::new(NoticeKind::Info, "hello".to_string(), 2);
        assert!(notice.tick());
        assert!(!notice.tick());
        assert!(!notice.tick());
    }
}
