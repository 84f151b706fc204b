//! Floating chat widget: toggle button, message log, Enter-to-send.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatState};
use crate::state::ui::UiState;

/// Shown in place of the pending line when the chat request fails; the
/// line stays in the log.
const CHAT_ERROR_TEXT: &str = "Error: could not reach the assistant.";

/// Chat widget with a toggleable window.
///
/// Enter on a non-empty input appends the user line plus a pending
/// "Thinking..." line, then relays the message to `/chat`. Replies are
/// rendered as plain text (escaped), never as markup. The log stays
/// pinned to its bottom as lines arrive.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let log_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the log scrolled to the newest line.
    Effect::new(move || {
        let _ = chat.get().lines.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = log_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let message = trimmed.to_owned();
        input.set(String::new());

        let placeholder_id = chat
            .try_update(|c| c.begin_exchange(&message))
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_chat(&message).await {
                Ok(reply) => chat.update(|c| c.resolve(&placeholder_id, reply)),
                Err(_) => {
                    chat.update(|c| c.fail(&placeholder_id, CHAT_ERROR_TEXT.to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (message, placeholder_id);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-widget">
            <button
                class="chat-widget__toggle"
                on:click=move |_| ui.update(UiState::toggle_chat)
            >
                "Chat"
            </button>

            <div
                class="chat-widget__window"
                class:chat-widget__window--hidden=move || !ui.get().chat_open
            >
                <div class="chat-widget__log" node_ref=log_ref>
                    {move || {
                        chat.get()
                            .lines
                            .iter()
                            .map(|line| {
                                let is_user = line.role == ChatRole::User;
                                let text = line.text.clone();
                                let pending = line.pending;
                                view! {
                                    <div
                                        class="chat-widget__line"
                                        class:chat-widget__line--user=is_user
                                        class:chat-widget__line--pending=pending
                                    >
                                        {text}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Ask about your plan..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </div>
    }
}
