//! Messaging inbox: conversation list plus a chat pane.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::{Conversation, Message, MessageDraft};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

/// Case-insensitive partner-name filter for the sidebar search box.
fn filter_conversations(conversations: &[Conversation], term: &str) -> Vec<Conversation> {
    let term = term.trim().to_lowercase();
    conversations
        .iter()
        .filter(|conv| term.is_empty() || conv.partner_name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Zero the unread counter of one conversation after it is opened.
#[cfg(any(test, feature = "hydrate"))]
fn clear_unread(conversations: &mut [Conversation], partner_id: i64) {
    if let Some(conv) = conversations.iter_mut().find(|c| c.partner_id == partner_id) {
        conv.unread_count = 0;
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let conversations = RwSignal::new(Vec::<Conversation>::new());
    let selected = RwSignal::new(None::<Conversation>);
    let messages = RwSignal::new(Vec::<Message>::new());
    let new_message = RwSignal::new(String::new());
    let search_term = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let sending = RwSignal::new(false);

    let open_conversation = move |conv: Conversation| {
        let partner_id = conv.partner_id;
        selected.set(Some(conv));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_conversation_messages(partner_id).await {
                Ok(history) => messages.set(history),
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            crate::net::api::mark_read(partner_id).await;
            conversations.update(|list| clear_unread(list, partner_id));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = partner_id;
        }
    };

    // Initial load: inbox, then either the ?userId= partner or the first
    // conversation.
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        let requested_partner = query
            .get_untracked()
            .get("userId")
            .and_then(|raw| raw.parse::<i64>().ok());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_conversations().await {
                Ok(inbox) => {
                    let first = inbox.first().cloned();
                    conversations.set(inbox);
                    if let Some(partner_id) = requested_partner {
                        match crate::net::api::start_conversation(partner_id).await {
                            Ok(conv) => {
                                if !conversations
                                    .get_untracked()
                                    .iter()
                                    .any(|c| c.partner_id == conv.partner_id)
                                {
                                    conversations.update(|list| list.insert(0, conv.clone()));
                                }
                                open_conversation(conv);
                            }
                            Err(message) => crate::state::toast::show_error(toasts, message),
                        }
                    } else if let Some(conv) = first {
                        open_conversation(conv);
                    }
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = requested_partner;
            loading.set(false);
        }
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(conv) = selected.get_untracked() else {
            return;
        };
        let content = new_message.get().trim().to_owned();
        if content.is_empty() || sending.get_untracked() {
            return;
        }
        sending.set(true);
        let draft = MessageDraft {
            receiver_id: conv.partner_id,
            application_id: None,
            job_id: None,
            content,
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&draft).await {
                Ok(sent) => {
                    new_message.set(String::new());
                    messages.update(|list| list.push(sent));
                    // Refresh previews so the sidebar shows the new last message.
                    if let Ok(inbox) = crate::net::api::fetch_conversations().await {
                        conversations.set(inbox);
                    }
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            sending.set(false);
        }
    };

    let my_id = move || auth.get().user_id().unwrap_or_default();

    view! {
        <div class="page messages-page">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading messages..."</p> }
            >
                <div class="card messages-layout">
                    <aside class="conversations-sidebar">
                        <h2 class="conversations-sidebar__title">"Messages"</h2>
                        <input
                            class="conversations-sidebar__search"
                            type="text"
                            placeholder="Search conversations..."
                            prop:value=move || search_term.get()
                            on:input=move |ev| search_term.set(event_target_value(&ev))
                        />
                        <div class="conversations-list">
                            <Show
                                when=move || !conversations.get().is_empty()
                                fallback=move || {
                                    view! { <p class="empty-section">"No conversations yet"</p> }
                                }
                            >
                                <For
                                    each=move || {
                                        filter_conversations(&conversations.get(), &search_term.get())
                                    }
                                    key=|conv| (conv.partner_id, conv.unread_count)
                                    children=move |conv| {
                                        let partner_id = conv.partner_id;
                                        let open = conv.clone();
                                        view! {
                                            <button
                                                class="conversation-item"
                                                class:conversation-item--active=move || {
                                                    selected
                                                        .get()
                                                        .is_some_and(|s| s.partner_id == partner_id)
                                                }
                                                on:click=move |_| open_conversation(open.clone())
                                            >
                                                <span class="job-card__logo">
                                                    {format::initial(&conv.partner_name)}
                                                </span>
                                                <span class="conversation-item__info">
                                                    <span class="conversation-item__name">
                                                        {conv.partner_name.clone()}
                                                    </span>
                                                    <span class="conversation-item__preview">
                                                        {conv.last_message
                                                            .clone()
                                                            .unwrap_or_else(|| "No messages yet".to_owned())}
                                                    </span>
                                                </span>
                                                {conv.last_message_time.clone().map(|ts| {
                                                    view! {
                                                        <span class="conversation-item__time">
                                                            {format::message_time(&ts, format::now_naive())}
                                                        </span>
                                                    }
                                                })}
                                                <Show when={
                                                    let unread = conv.unread_count;
                                                    move || unread > 0
                                                }>
                                                    <span class="conversation-item__unread">
                                                        {conv.unread_count}
                                                    </span>
                                                </Show>
                                            </button>
                                        }
                                    }
                                />
                            </Show>
                        </div>
                    </aside>

                    <section class="chat-pane">
                        <Show
                            when=move || selected.get().is_some()
                            fallback=move || {
                                view! {
                                    <div class="chat-pane__empty">
                                        <h3>"Select a conversation"</h3>
                                        <p>"Choose a conversation from the list to start messaging"</p>
                                    </div>
                                }
                            }
                        >
                            <header class="chat-pane__header">
                                <span class="job-card__logo">
                                    {move || {
                                        format::initial(
                                            &selected.get().map(|s| s.partner_name).unwrap_or_default(),
                                        )
                                    }}
                                </span>
                                <h3>{move || selected.get().map(|s| s.partner_name).unwrap_or_default()}</h3>
                            </header>

                            <div class="chat-pane__messages">
                                <Show
                                    when=move || !messages.get().is_empty()
                                    fallback=move || {
                                        view! {
                                            <p class="empty-section">
                                                "No messages yet. Start the conversation!"
                                            </p>
                                        }
                                    }
                                >
                                    <For
                                        each=move || messages.get()
                                        key=|message| message.id
                                        children=move |message| {
                                            let sent = message.sender_id == my_id();
                                            view! {
                                                <div
                                                    class="chat-message"
                                                    class:chat-message--sent=sent
                                                    class:chat-message--received=!sent
                                                >
                                                    <p class="chat-message__content">
                                                        {message.content.clone()}
                                                    </p>
                                                    <span class="chat-message__time">
                                                        {format::message_time(
                                                            &message.sent_at,
                                                            format::now_naive(),
                                                        )}
                                                    </span>
                                                </div>
                                            }
                                        }
                                    />
                                </Show>
                            </div>

                            <form class="chat-pane__composer" on:submit=on_send>
                                <input
                                    class="chat-pane__input"
                                    type="text"
                                    placeholder="Type a message..."
                                    prop:value=move || new_message.get()
                                    on:input=move |ev| new_message.set(event_target_value(&ev))
                                    disabled=move || sending.get()
                                />
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || {
                                        sending.get() || new_message.get().trim().is_empty()
                                    }
                                >
                                    "Send"
                                </button>
                            </form>
                        </Show>
                    </section>
                </div>
            </Show>
        </div>
    }
}
