//! Chatbot widget for sending prompts and displaying assistant replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript is widget-local: no other widget reads it, and a failed
//! request appends a synthetic assistant apology so the conversation stays
//! visibly continuous alongside the error line.

#[cfg(test)]
#[path = "chatbot_widget_test.rs"]
mod chatbot_widget_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::state::session::SessionState;
use crate::state::submit::Submission;

pub(crate) const CHAT_GREETING: &str = "Hi! I'm your virtual assistant. How can I help you today?";
pub(crate) const CHAT_FAILED: &str = "Could not reach the assistant.";
pub(crate) const CHAT_FALLBACK: &str = "Sorry, I can't answer right now.";

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::User,
            text: text.to_owned(),
        }
    }

    pub fn assistant(text: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            text: text.to_owned(),
        }
    }
}

/// Whether a prompt may be sent right now.
pub(crate) fn can_send(input: &str, submitting: bool) -> bool {
    !input.trim().is_empty() && !submitting
}

/// Chat panel showing the transcript and a prompt input.
#[component]
pub fn ChatbotWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let messages = RwSignal::new(vec![ChatMessage::assistant(CHAT_GREETING)]);
    let submission = RwSignal::new(Submission::<()>::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = messages.get().len();
        let _ = submission.get().is_submitting();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let prompt = input.get().trim().to_owned();
        if !can_send(&prompt, submission.get().is_submitting()) {
            return;
        }
        let mut generation = None;
        submission.update(|s| generation = s.begin());
        let Some(generation) = generation else {
            return;
        };
        messages.update(|m| m.push(ChatMessage::user(&prompt)));
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::util::session::read_token() {
                Some(token) => crate::net::api::send_chat_message(&token, &prompt).await,
                None => Err(ApiError::Auth),
            };
            match outcome {
                Ok(reply) => {
                    let mut accepted = false;
                    submission.update(|s| accepted = s.resolve(generation, Ok(())));
                    if accepted {
                        messages.update(|m| m.push(ChatMessage::assistant(&reply)));
                    }
                }
                Err(err) => {
                    log::error!("chat request failed: {err}");
                    if err == ApiError::Auth {
                        crate::state::session::terminate(session);
                    }
                    let mut accepted = false;
                    submission.update(|s| accepted = s.resolve(generation, Err(CHAT_FAILED)));
                    if accepted {
                        messages.update(|m| m.push(ChatMessage::assistant(CHAT_FALLBACK)));
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (prompt, generation, session);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let send_enabled = move || can_send(&input.get(), submission.get().is_submitting());

    view! {
        <div class="chat-widget">
            <div class="chat-widget__messages" node_ref=messages_ref>
                {move || {
                    messages
                        .get()
                        .iter()
                        .map(|msg| {
                            let is_assistant = msg.role == ChatRole::Assistant;
                            let text = msg.text.clone();
                            view! {
                                <div
                                    class="chat-widget__message"
                                    class:chat-widget__message--assistant=is_assistant
                                >
                                    {if is_assistant {
                                        let rendered = render_markdown_html(&text);
                                        view! {
                                            <div
                                                class="chat-widget__markdown"
                                                inner_html=rendered
                                            ></div>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span>{text}</span> }.into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    submission
                        .get()
                        .is_submitting()
                        .then(|| view! { <div class="chat-widget__loading">"..."</div> })
                }}
            </div>

            {move || {
                submission
                    .get()
                    .failure()
                    .map(|message| view! { <p class="chat-widget__error">{message}</p> })
            }}

            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Type your question..."
                    disabled=move || submission.get().is_submitting()
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-widget__send"
                    on:click=on_click
                    disabled=move || !send_enabled()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from assistant output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
