//! Inbox helpers: unread badge count and opening a message.

use crate::config::InboxRules;
use crate::models::Message;

/// Number shown on the navigation badge.
pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}

/// Find the message to display. When `mark_read_on_open` is enabled the
/// message's unread flag is cleared; otherwise the list is left untouched.
pub fn open_message<'a>(
    messages: &'a mut [Message],
    id: &str,
    rules: &InboxRules,
) -> Option<&'a Message> {
    let message = messages.iter_mut().find(|m| m.id == id)?;
    if rules.mark_read_on_open && !message.is_read {
        message.is_read = true;
        tracing::debug!(id, "message marked read");
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_messages;

    #[test]
    fn seeded_inbox_has_two_unread() {
        assert_eq!(unread_count(&seed_messages()), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn opening_keeps_badge_by_default() {
        let mut messages = seed_messages();
        let opened = open_message(&mut messages, "2", &InboxRules::default()).unwrap();
        assert_eq!(opened.title, "【限定招待】製品開発会議へのオンライン参加について");
        assert_eq!(unread_count(&messages), 2);
    }

    #[test]
    fn opening_marks_read_when_enabled() {
        let rules = InboxRules {
            mark_read_on_open: true,
        };
        let mut messages = seed_messages();
        open_message(&mut messages, "1", &rules);
        assert_eq!(unread_count(&messages), 1);
        open_message(&mut messages, "1", &rules);
        assert_eq!(unread_count(&messages), 1);
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn unknown_id_opens_nothing() {
        let mut messages = seed_messages();
        assert!(open_message(&mut messages, "nope", &InboxRules::default()).is_none());
    }
}
