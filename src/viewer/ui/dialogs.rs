//! Modal message dialogs.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::viewer::engine::{Notice, NoticeLevel};

/// Map a notice severity to the native dialog level
pub fn dialog_level(level: NoticeLevel) -> MessageLevel {
    match level {
        NoticeLevel::Warning => MessageLevel::Warning,
        NoticeLevel::Critical => MessageLevel::Error,
    }
}

/// Show a notice as a native modal dialog, blocking until it is dismissed
pub fn show_notice(notice: &Notice) {
    MessageDialog::new()
        .set_level(dialog_level(notice.level))
        .set_title(notice.title.as_str())
        .set_description(notice.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_level() {
        assert!(matches!(dialog_level(NoticeLevel::Warning), MessageLevel::Warning));
        assert!(matches!(dialog_level(NoticeLevel::Critical), MessageLevel::Error));
    }
}
