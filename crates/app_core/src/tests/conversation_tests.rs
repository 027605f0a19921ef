use super::*;
use chrono::Duration;

#[test]
fn starts_idle_with_greeting() {
    let log = ConversationLog::new(greeting_for("Jane"));

    assert_eq!(log.messages().len(), 1);
    assert!(!log.is_responding());
    let greeting = log.last().expect("greeting");
    assert_eq!(greeting.role, Role::Assistant);
    assert!(greeting.content.starts_with("Hi Jane! I'm your productivity co-pilot."));
    assert_eq!(greeting.message_id, MessageId(1));
}

#[test]
fn appends_keep_call_order_and_count() {
    let mut log = ConversationLog::new("hello");
    let contents = ["one", "two", "three", "four"];
    for (index, content) in contents.iter().enumerate() {
        let role = if index % 2 == 0 {
            Role::User
        } else {
            Role::Assistant
        };
        let appended = log.append(role, *content);
        assert_eq!(appended.content, *content);
    }

    assert_eq!(log.messages().len(), contents.len() + 1);
    let stored: Vec<&str> = log.messages()[1..]
        .iter()
        .map(|message| message.content.as_str())
        .collect();
    assert_eq!(stored, contents);
    assert!(log
        .messages()
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at
            && pair[0].message_id < pair[1].message_id));
}

#[test]
fn responding_only_between_user_and_assistant_append() {
    let mut log = ConversationLog::new("hello");

    for _ in 0..3 {
        assert!(!log.is_responding());
        log.append(Role::User, "question");
        assert!(log.is_responding());
        assert_eq!(log.state(), ReplyState::AwaitingReply);
        log.append(Role::Assistant, "answer");
        assert!(!log.is_responding());
    }
}

#[test]
fn backwards_clock_reading_is_clamped() {
    let mut log = ConversationLog::new("hello");
    let seeded_at = log.last().expect("greeting").created_at;

    let earlier = seeded_at - Duration::minutes(5);
    let message = log.append_at(Role::User, "late", earlier);

    assert_eq!(message.created_at, seeded_at);
}

#[test]
fn empty_content_is_accepted_by_the_log() {
    let mut log = ConversationLog::new("hello");
    let message = log.append(Role::User, "");
    assert_eq!(message.content, "");
    assert_eq!(log.messages().len(), 2);
}

#[test]
fn abandon_reply_returns_to_idle_without_appending() {
    let mut log = ConversationLog::new("hello");
    log.append(Role::User, "question");
    log.abandon_reply();

    assert!(!log.is_responding());
    assert_eq!(log.messages().len(), 2);
}

#[test]
fn blank_draft_clears_input() {
    let mut log = ConversationLog::new(greeting_for("Jane"));

    log.set_draft("Compare the phases");
    assert_eq!(log.draft(), Some("Compare the phases"));
    log.set_draft("   ");
    assert_eq!(log.draft(), None);
    assert_eq!(log.messages().len(), 1);
}
