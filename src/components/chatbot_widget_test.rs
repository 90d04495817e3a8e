use super::*;

// =============================================================
// Send guard
// =============================================================

#[test]
fn blank_prompt_cannot_be_sent() {
    assert!(!can_send("", false));
    assert!(!can_send("   ", false));
}

#[test]
fn prompt_cannot_be_sent_while_submitting() {
    assert!(!can_send("hello", true));
}

#[test]
fn nonblank_idle_prompt_can_be_sent() {
    assert!(can_send("hello", false));
}

// =============================================================
// Transcript entries
// =============================================================

#[test]
fn constructors_assign_roles_and_unique_ids() {
    let user = ChatMessage::user("hi");
    let assistant = ChatMessage::assistant("hello");
    assert_eq!(user.role, ChatRole::User);
    assert_eq!(assistant.role, ChatRole::Assistant);
    assert_ne!(user.id, assistant.id);
}

#[test]
fn failure_appends_fallback_while_keeping_error_line() {
    // Mirror of the widget's failure path: the transcript gains the
    // synthetic apology and the submission records the static error.
    let mut messages = vec![ChatMessage::assistant(CHAT_GREETING)];
    let mut submission = Submission::<()>::default();

    let generation = submission.begin().unwrap();
    messages.push(ChatMessage::user("what were last month's sales?"));
    assert!(submission.resolve(generation, Err(CHAT_FAILED)));
    messages.push(ChatMessage::assistant(CHAT_FALLBACK));

    assert_eq!(submission.failure(), Some(CHAT_FAILED));
    assert_eq!(messages.last().unwrap().text, CHAT_FALLBACK);
    assert_eq!(messages.last().unwrap().role, ChatRole::Assistant);
}

// =============================================================
// Markdown rendering
// =============================================================

#[test]
fn markdown_renders_emphasis() {
    let out = render_markdown_html("sales are **up**");
    assert!(out.contains("<strong>up</strong>"));
}

#[test]
fn markdown_strips_raw_html() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
}
